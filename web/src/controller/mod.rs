pub(crate) mod family_member_controller;
pub(crate) mod health_check_controller;
pub(crate) mod theme_controller;
