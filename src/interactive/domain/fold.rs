/// Case folding for keyword matching.
/// ASCII strings take the cheap path; anything else falls back to Unicode lowercasing.
pub trait FastLowercase {
    fn fast_to_lowercase(&self) -> String;
}

impl FastLowercase for str {
    #[inline]
    fn fast_to_lowercase(&self) -> String {
        if self.is_ascii() {
            self.to_ascii_lowercase()
        } else {
            self.to_lowercase()
        }
    }
}
