pub(crate) mod background;
pub(crate) mod card;
pub(crate) mod icon;
pub(crate) mod resize;
