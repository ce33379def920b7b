mod buttons;
mod status_area;
mod top_bar;

pub(super) use buttons::action_button;
