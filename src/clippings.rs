// Parsing of the "My Clippings.txt" file a Kindle keeps on its internal storage
//
// Every highlight or note is appended as a block of the form
//
//   $title_line
//   $location_and_date_line
//
//   $text
//   ==========
//
// Off-format input is an error, but a few quirks are fool-proofed:
// - line endings are CR+LF on the device, LF after most file transfers
// - sideloaded books encode the author into the title line in two known
//   ways ("$title ($author)" for EPUBs, "$title - $author" for Calibre
//   PDFs); everything else is kept as a bare title

pub mod clipping;
pub mod filter;
pub mod parser;
pub mod renderer;
pub mod title_parser;
