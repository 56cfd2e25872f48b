mod generate_terrain_kinds;
mod verify;

pub use verify::{VerifyError, verify_tile_map};
