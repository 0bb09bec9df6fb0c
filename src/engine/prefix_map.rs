// Copyright (C) 2025 Kashin Vladislav
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use log::trace;

/// Read-only view over a key-sorted `(key, value)` table.
#[derive(Debug, Clone, Copy)]
pub struct PrefixMap {
    entries: &'static [(&'static str, &'static str)],
}

impl PrefixMap {
    pub const fn new(entries: &'static [(&'static str, &'static str)]) -> Self {
        Self { entries }
    }

    pub fn get(&self, key: &str) -> Option<&'static str> {
        self.entries
            .binary_search_by(|(k, _)| (*k).cmp(key))
            .ok()
            .map(|i| self.entries[i].1)
    }

    /// Returns the value of the longest key that is a prefix of `number`.
    pub fn lookup_longest(&self, number: &str) -> Option<&'static str> {
        for len in (1..=number.len()).rev() {
            let Some(prefix) = number.get(..len) else {
                continue;
            };
            if let Some(value) = self.get(prefix) {
                trace!("Prefix {} matched for {}", prefix, number);
                return Some(value);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::PrefixMap;

    static TABLE: &[(&str, &str)] = &[
        ("1", "NANPA"),
        ("1415", "California"),
        ("1650", "California"),
        ("44", "United Kingdom"),
        ("4420", "London"),
    ];

    #[test]
    fn test_longest_prefix_wins() {
        let map = PrefixMap::new(TABLE);
        assert_eq!(map.lookup_longest("14155552671"), Some("California"));
        assert_eq!(map.lookup_longest("12125550000"), Some("NANPA"));
        assert_eq!(map.lookup_longest("442087654321"), Some("London"));
        assert_eq!(map.lookup_longest("441134960000"), Some("United Kingdom"));
    }

    #[test]
    fn test_no_match() {
        let map = PrefixMap::new(TABLE);
        assert_eq!(map.lookup_longest("33123456789"), None);
        assert_eq!(map.lookup_longest(""), None);
        assert_eq!(map.get("141"), None);
    }
}
