pub mod clippings;
