use crate::clippings::clipping::Clipping;

// Exact match on the normalized title; no filter passes everything through.
pub fn filter_by_title(clippings: Vec<Clipping>, title_filter: Option<&str>) -> Vec<Clipping> {
    match title_filter {
        None => clippings,
        Some(title) => clippings.into_iter().filter(|c| c.title == title).collect(),
    }
}
