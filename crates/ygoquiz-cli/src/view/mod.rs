pub(crate) use self::{
    key_binding_display::{KeyBinding, KeyBindingDisplay},
    mode_menu::ModeMenu,
    round_display::RoundDisplay,
    score_display::ScoreDisplay,
};

mod key_binding_display;
mod mode_menu;
mod round_display;
mod score_display;
pub(crate) mod style;
