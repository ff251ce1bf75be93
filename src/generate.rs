pub(crate) mod chooser;
pub(crate) mod regions;
pub(crate) mod segments;
