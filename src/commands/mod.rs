pub mod base_commands;
pub mod grid_format;
pub mod periods_cmd;
pub mod replay_cmd;
pub mod styles_cmd;
