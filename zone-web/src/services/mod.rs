pub mod game_actions;
pub mod state_serializer;
