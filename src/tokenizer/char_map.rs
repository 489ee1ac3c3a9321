/// Number of code points served by the direct lookup table.
const TABLE_SIZE: usize = 0x100;

/// Maps code-point ranges to values.
///
/// Latin-1 characters resolve through a flat table. Everything above goes
/// through a list of intervals searched newest first, so a later
/// registration overrides an earlier one for the characters they share.
///
/// # Example
/// ```
/// use reckon::tokenizer::char_map::CharMap;
///
/// let mut map = CharMap::new();
/// map.add_interval('\0', char::MAX, "symbol");
/// map.add_interval('a', 'z', "word");
///
/// assert_eq!(map.lookup('q'), Some(&"word"));
/// assert_eq!(map.lookup('+'), Some(&"symbol"));
/// assert_eq!(map.lookup('€'), Some(&"symbol"));
/// ```
#[derive(Debug, Clone)]
pub struct CharMap<T> {
    table:     Vec<Option<T>>,
    intervals: Vec<(char, char, Option<T>)>,
}

impl<T: Clone> CharMap<T> {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self { table:     vec![None; TABLE_SIZE],
               intervals: Vec::new(), }
    }

    /// Associates every character in `start..=end` with `value`.
    ///
    /// An inverted range is ignored.
    pub fn add_interval(&mut self, start: char, end: char, value: T) {
        self.assign(start, end, Some(value));
    }

    /// Removes any association for the characters in `start..=end`.
    pub fn remove_interval(&mut self, start: char, end: char) {
        self.assign(start, end, None);
    }

    /// Forgets every registered interval.
    pub fn clear(&mut self) {
        self.table.fill(None);
        self.intervals.clear();
    }

    /// Returns the value registered for `chr`, if any.
    #[must_use]
    pub fn lookup(&self, chr: char) -> Option<&T> {
        let code = chr as usize;
        if code < TABLE_SIZE {
            return self.table[code].as_ref();
        }

        self.intervals
            .iter()
            .find(|(start, end, _)| (*start..=*end).contains(&chr))
            .and_then(|(_, _, value)| value.as_ref())
    }

    fn assign(&mut self, start: char, end: char, value: Option<T>) {
        if start > end {
            return;
        }

        let table_end = (end as usize).min(TABLE_SIZE - 1);
        for slot in self.table.iter_mut().take(table_end + 1).skip(start as usize) {
            slot.clone_from(&value);
        }

        if end as usize >= TABLE_SIZE {
            let start = if (start as usize) < TABLE_SIZE { '\u{100}' } else { start };
            self.intervals.insert(0, (start, end, value));
        }
    }
}

impl<T: Clone> Default for CharMap<T> {
    fn default() -> Self {
        Self::new()
    }
}
