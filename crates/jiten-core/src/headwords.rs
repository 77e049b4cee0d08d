/// Reading → written expressions, in first-seen order on both levels.
/// Expression lists never hold duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeadwordMap {
    entries: Vec<(String, Vec<String>)>,
}

impl HeadwordMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Primary map: every reading gets the one expression
    pub fn from_primary(expression: &str, readings: &[String]) -> Self {
        let mut map = Self::new();
        for reading in readings {
            map.insert(reading, expression);
        }
        map
    }

    /// Add `expression` under `reading` unless it's already there
    pub fn insert(&mut self, reading: &str, expression: &str) {
        let idx = match self.entries.iter().position(|(r, _)| r == reading) {
            Some(idx) => idx,
            None => {
                self.entries.push((reading.to_string(), Vec::new()));
                self.entries.len() - 1
            }
        };

        let expressions = &mut self.entries[idx].1;
        if !expressions.iter().any(|e| e == expression) {
            expressions.push(expression.to_string());
        }
    }

    /// Fold `other` in, keeping this map's order first
    pub fn merge(&mut self, other: &HeadwordMap) {
        for (reading, expressions) in other.iter() {
            for expression in expressions {
                self.insert(reading, expression);
            }
        }
    }

    pub fn get(&self, reading: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(r, _)| r == reading)
            .map(|(_, e)| e.as_slice())
    }

    pub fn readings(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(r, _)| r.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries.iter().map(|(r, e)| (r.as_str(), e.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
