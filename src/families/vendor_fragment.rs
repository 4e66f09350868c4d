use aho_corasick::AhoCorasick;

use crate::db::VendorFragmentMap;
use crate::error::Result;
use crate::tables;

/// Brand fallback by literal UA fragments.
///
/// All fragments share one automaton. Fragments are numbered in brand order,
/// so the lowest matching pattern id belongs to the first brand in the file.
pub struct VendorFragments {
    automaton: Option<AhoCorasick>,
    /// Pattern id → index into `brands`.
    pattern_brand: Vec<usize>,
    brands: Vec<String>,
}

impl VendorFragments {
    pub fn new(fragments: VendorFragmentMap) -> Result<Self> {
        let mut patterns = Vec::new();
        let mut pattern_brand = Vec::new();
        let mut brands = Vec::with_capacity(fragments.len());

        for (brand, list) in fragments {
            let idx = brands.len();
            brands.push(tables::resolve_brand(&brand));
            for fragment in list.into_iter().filter(|f| !f.is_empty()) {
                patterns.push(fragment);
                pattern_brand.push(idx);
            }
        }

        let automaton = if patterns.is_empty() {
            None
        } else {
            Some(AhoCorasick::new(&patterns)?)
        };

        Ok(Self {
            automaton,
            pattern_brand,
            brands,
        })
    }

    /// Brand code of the first brand with a fragment in `ua`.
    pub fn parse(&self, ua: &str) -> Option<&str> {
        let automaton = self.automaton.as_ref()?;
        let first = automaton
            .find_overlapping_iter(ua)
            .map(|m| m.pattern().as_usize())
            .min()?;
        self.brands
            .get(self.pattern_brand[first])
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.brands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.brands.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fragments() -> VendorFragments {
        let map: VendorFragmentMap = serde_yaml::from_str(
            "Dell:\n  - 'MDDR'\n  - 'MDDC'\nAcer:\n  - 'MAAR'\n  - ''\nSamsung:\n  - 'MASM'\n  - 'SAMSUNG'\n",
        )
        .unwrap();
        VendorFragments::new(map).unwrap()
    }

    #[test]
    fn first_brand_in_file_order_wins() {
        let vf = fragments();
        assert_eq!(vf.parse("Mozilla/5.0 (compatible; MSIE 10.0; Windows NT 6.2; MDDRJS)"), Some("DL"));
        // MASM appears first in the UA but Acer is listed before Samsung.
        assert_eq!(vf.parse("Windows NT 6.1; MASM; MAAR"), Some("AC"));
    }

    #[test]
    fn fragments_are_case_sensitive() {
        assert_eq!(fragments().parse("Windows NT 6.1; mddr"), None);
    }

    #[test]
    fn empty_fragments_never_match() {
        assert_eq!(fragments().parse("Windows NT 6.1"), None);
        let empty = VendorFragments::new(VendorFragmentMap::new()).unwrap();
        assert!(empty.is_empty());
        assert_eq!(empty.parse("MDDR"), None);
    }
}
