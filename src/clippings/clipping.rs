use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clipping {
    pub title: String,
    pub author: Option<String>,
    pub text: String,
}

impl Clipping {
    // Clippings of the same author sort together, then by title.
    // The key is the plain concatenation, not a tuple; an author
    // containing ':' interleaves accordingly.
    pub fn sort_key(&self) -> String {
        format!("{}:{}", self.author.as_deref().unwrap_or(""), self.title)
    }
}

// Stable, so clippings with an equal key keep their file order.
pub fn sort_clippings(clippings: &mut [Clipping]) {
    clippings.sort_by_key(|c| c.sort_key());
}
