pub(crate) mod theme_preference;
