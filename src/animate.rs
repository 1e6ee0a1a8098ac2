pub(crate) mod draw;
pub(crate) mod glint;
pub(crate) mod shimmer;
