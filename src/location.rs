// Location sync - the navigable address and its history
//
// The current module index is encoded in a `module` query parameter on the
// deck's address, which makes every demo bookmarkable: launching the deck
// with the printed address lands on the same module. The address also backs
// a browser-style history stack - each index change pushes a new entry
// without reloading anything, and the history keys walk back and forward
// through previously visited addresses.

use url::Url;

/// Query parameter carrying the current module index.
const INDEX_PARAM: &str = "module";

/// Fallback address when the configured one does not parse.
const FALLBACK_ADDRESS: &str = "http://localhost:8080/index.html";

/// The deck's address plus its navigation history.
///
/// Semantics mirror a browser location bar: `write_index` is a push-state
/// (new entry, forward entries discarded), `back`/`forward` move the cursor
/// without creating entries.
#[derive(Debug)]
pub struct Location {
    entries: Vec<Url>,
    cursor: usize,
}

impl Location {
    pub fn new(address: &str) -> Self {
        let url = Url::parse(address).unwrap_or_else(|e| {
            tracing::warn!("unparseable address {:?} ({}); using fallback", address, e);
            Url::parse(FALLBACK_ADDRESS).expect("fallback address parses")
        });
        Self {
            entries: vec![url],
            cursor: 0,
        }
    }

    /// The module index encoded in the current address.
    ///
    /// Returns 0 when the parameter is absent or not a valid integer; this
    /// never fails.
    pub fn read_index(&self) -> usize {
        self.current()
            .query_pairs()
            .find(|(key, _)| key == INDEX_PARAM)
            .and_then(|(_, value)| value.parse().ok())
            .unwrap_or(0)
    }

    /// Rewrite the index parameter and push a new history entry.
    ///
    /// Entries ahead of the cursor are discarded, exactly like a browser
    /// push-state after going back.
    pub fn write_index(&mut self, index: usize) {
        let mut url = self.current().clone();
        set_index_param(&mut url, index);
        self.entries.truncate(self.cursor + 1);
        self.entries.push(url);
        self.cursor = self.entries.len() - 1;
    }

    /// Move to the previous history entry. Returns false at the oldest entry.
    pub fn back(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    /// Move to the next history entry. Returns false at the newest entry.
    pub fn forward(&mut self) -> bool {
        if self.cursor + 1 >= self.entries.len() {
            return false;
        }
        self.cursor += 1;
        true
    }

    pub fn current(&self) -> &Url {
        &self.entries[self.cursor]
    }

    /// The current address as a printable, bookmarkable string.
    pub fn address(&self) -> String {
        self.current().to_string()
    }
}

/// Replace (or append) the index parameter, keeping other query pairs intact.
fn set_index_param(url: &mut Url, index: usize) {
    let others: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(key, _)| key != INDEX_PARAM)
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();

    let mut pairs = url.query_pairs_mut();
    pairs.clear();
    for (key, value) in &others {
        pairs.append_pair(key, value);
    }
    pairs.append_pair(INDEX_PARAM, &index.to_string());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_index_defaults_to_zero() {
        assert_eq!(Location::new("http://localhost/index.html").read_index(), 0);
        assert_eq!(
            Location::new("http://localhost/index.html?module=abc").read_index(),
            0
        );
        assert_eq!(
            Location::new("http://localhost/index.html?module=-3").read_index(),
            0
        );
        // An unparseable address falls back rather than failing
        assert_eq!(Location::new("not a url at all").read_index(), 0);
    }

    #[test]
    fn read_index_parses_the_parameter() {
        let loc = Location::new("http://localhost/index.html?module=7");
        assert_eq!(loc.read_index(), 7);
    }

    #[test]
    fn write_then_read_round_trips() {
        let mut loc = Location::new("http://localhost/index.html");
        loc.write_index(3);
        assert_eq!(loc.read_index(), 3);
        loc.write_index(5);
        assert_eq!(loc.read_index(), 5);
    }

    #[test]
    fn write_index_preserves_other_query_pairs() {
        let mut loc = Location::new("http://localhost/index.html?theme=dark&module=1");
        loc.write_index(4);
        let addr = loc.address();
        assert!(addr.contains("theme=dark"));
        assert!(addr.contains("module=4"));
    }

    #[test]
    fn back_and_forward_walk_the_history() {
        let mut loc = Location::new("http://localhost/index.html?module=0");
        loc.write_index(1);
        loc.write_index(2);

        assert!(loc.back());
        assert_eq!(loc.read_index(), 1);
        assert!(loc.back());
        assert_eq!(loc.read_index(), 0);
        assert!(!loc.back());

        assert!(loc.forward());
        assert_eq!(loc.read_index(), 1);
        assert!(loc.forward());
        assert_eq!(loc.read_index(), 2);
        assert!(!loc.forward());
    }

    #[test]
    fn push_after_back_discards_forward_entries() {
        let mut loc = Location::new("http://localhost/index.html?module=0");
        loc.write_index(1);
        loc.write_index(2);
        assert!(loc.back());
        loc.write_index(9);
        // The entry for module=2 is gone
        assert!(!loc.forward());
        assert_eq!(loc.read_index(), 9);
    }
}
