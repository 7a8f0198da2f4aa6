mod project_card_vm;

pub use project_card_vm::{ProjectCardVm, map_project_cards};
