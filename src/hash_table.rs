use alloc::boxed::Box;
#[cfg(feature = "std")]
use alloc::string::String;
use alloc::vec::Vec;
use core::cell::Cell;
use core::fmt;
use core::fmt::Debug;
use core::fmt::Write;
use core::mem;

/// Default slot-array length for tables created without an explicit
/// configuration.
pub const DEFAULT_INITIAL_CAPACITY: usize = 16;

/// Default load factor at which a table grows.
pub const DEFAULT_LOAD_THRESHOLD: f64 = 0.75;

/// Default multiplier applied to the capacity on each growth event.
pub const DEFAULT_GROWTH_FACTOR: usize = 2;

fn empty_slots<K, V>(capacity: usize) -> Box<[Option<(K, V)>]> {
    core::iter::repeat_with(|| None).take(capacity).collect()
}

/// Client-supplied behavior for a [`HashTable`].
///
/// The table never interprets key or value contents itself: hashing and
/// equivalence are delegated to this trait, supplied once at construction.
/// `release` is the optional teardown capability — override it to take
/// custody of each entry exactly once when the table is dropped.
///
/// `hash` must be deterministic (equal keys hash equal across calls,
/// including across growth events), and `equals` must be a true equivalence
/// relation over the key domain; table correctness depends on both.
///
/// # Examples
///
/// ```rust
/// use core::hash::Hash;
/// use core::hash::Hasher;
///
/// use probe_hash::hash_table::TableOps;
/// use siphasher::sip::SipHasher;
///
/// struct StrOps {
///     k0: u64,
///     k1: u64,
/// }
///
/// impl TableOps<String, u32> for StrOps {
///     fn hash(&self, key: &String) -> u64 {
///         let mut hasher = SipHasher::new_with_keys(self.k0, self.k1);
///         key.hash(&mut hasher);
///         hasher.finish()
///     }
///
///     fn equals(&self, a: &String, b: &String) -> bool {
///         a == b
///     }
/// }
/// ```
pub trait TableOps<K, V> {
    /// Hashes a key. Equal keys must produce equal hashes.
    fn hash(&self, key: &K) -> u64;

    /// Tests two keys for equivalence.
    fn equals(&self, a: &K, b: &K) -> bool;

    /// Takes custody of an entry at teardown time.
    ///
    /// Invoked exactly once per occupied slot when the table is dropped,
    /// never during updates (an updated entry's previous value is returned
    /// to the caller by [`HashTable::put`] instead). The default simply
    /// drops both halves.
    fn release(&self, key: K, value: V) {
        let _ = (key, value);
    }
}

/// Rendering capability used by the diagnostic dump.
///
/// Implementing this alongside [`TableOps`] makes [`HashTable::dump_into`]
/// and [`HashTable::dump`] available; a behavior without it simply cannot
/// render slot contents.
pub trait EntryFormatter<K, V> {
    /// Writes a human-readable rendering of one occupied entry.
    fn write_entry(&self, key: &K, value: &V, out: &mut dyn Write) -> fmt::Result;
}

/// Growth-policy configuration for a [`HashTable`].
///
/// The policy is explicit so it can be tested independently of the probing
/// algorithm. The defaults are [`DEFAULT_INITIAL_CAPACITY`],
/// [`DEFAULT_LOAD_THRESHOLD`], and [`DEFAULT_GROWTH_FACTOR`].
///
/// # Examples
///
/// ```rust
/// use probe_hash::hash_table::TableConfig;
///
/// let config = TableConfig {
///     initial_capacity: 4,
///     ..TableConfig::default()
/// };
/// assert_eq!(config.load_threshold, 0.75);
/// assert_eq!(config.growth_factor, 2);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TableConfig {
    /// Slot-array length at creation. Must be at least 1.
    pub initial_capacity: usize,
    /// Load factor (`occupancy / capacity`) at or above which a `put` grows
    /// the table before placing its entry. Must be within `(0, 1]`.
    pub load_threshold: f64,
    /// Capacity multiplier per growth event. Must be at least 2.
    pub growth_factor: usize,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
            load_threshold: DEFAULT_LOAD_THRESHOLD,
            growth_factor: DEFAULT_GROWTH_FACTOR,
        }
    }
}

impl TableConfig {
    fn validate(&self) {
        assert!(
            self.initial_capacity > 0,
            "initial_capacity must be at least 1"
        );
        assert!(
            self.load_threshold > 0.0 && self.load_threshold <= 1.0,
            "load_threshold must be within (0, 1]"
        );
        assert!(self.growth_factor >= 2, "growth_factor must be at least 2");
    }
}

/// A point-in-time snapshot of a table's occupancy and probe counters.
///
/// `collisions` and `rehashes` are lifetime counters: they accumulate over
/// every existence check, insertion, and growth event and are never reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    /// Number of occupied slots.
    pub occupancy: usize,
    /// Current slot-array length.
    pub capacity: usize,
    /// Cumulative probe steps that landed on a non-matching occupied slot.
    pub collisions: u64,
    /// Cumulative growth events.
    pub rehashes: u64,
}

impl Stats {
    /// Ratio of occupancy to capacity.
    pub fn load_factor(&self) -> f64 {
        self.occupancy as f64 / self.capacity as f64
    }

    /// Pretty-prints the snapshot to stdout.
    #[cfg(feature = "std")]
    pub fn print(&self) {
        println!("=== Probe Table Statistics ===");
        println!(
            "Occupancy: {}/{} ({:.2}% load factor)",
            self.occupancy,
            self.capacity,
            self.load_factor() * 100.0
        );
        println!("Collisions: {}", self.collisions);
        println!("Rehashes: {}", self.rehashes);
    }
}

/// A hash table using linear probing with threshold-triggered growth.
///
/// `HashTable<K, V, B>` stores key-value pairs and delegates all hashing and
/// key comparison to the behavior `B`, supplied at construction. Collisions
/// are resolved by scanning consecutive slots (wrapping at the capacity)
/// from the ideal index until an empty or matching slot is found. Once the
/// load factor reaches the configured threshold, the next insertion grows
/// the slot array and redistributes every entry before placing its own.
///
/// The table keeps lifetime counters for probe collisions and growth
/// events, exposed through [`stats`] and the diagnostic [`dump_into`].
///
/// There is no per-entry removal operation; entries live until the table is
/// dropped, at which point [`TableOps::release`] observes each of them
/// exactly once.
///
/// The table is single-threaded: the collision counter uses interior
/// mutability so lookups can count, which makes the table `!Sync` by
/// construction. Callers needing shared access must serialize externally.
///
/// [`stats`]: HashTable::stats
/// [`dump_into`]: HashTable::dump_into
///
/// # Examples
///
/// ```rust
/// # use core::hash::Hash;
/// # use core::hash::Hasher;
/// #
/// # use probe_hash::hash_table::HashTable;
/// # use probe_hash::hash_table::TableOps;
/// # use siphasher::sip::SipHasher;
/// #
/// struct IdOps;
///
/// impl TableOps<u64, String> for IdOps {
///     fn hash(&self, key: &u64) -> u64 {
///         let mut hasher = SipHasher::new();
///         key.hash(&mut hasher);
///         hasher.finish()
///     }
///
///     fn equals(&self, a: &u64, b: &u64) -> bool {
///         a == b
///     }
/// }
///
/// let mut table = HashTable::with_ops(IdOps);
/// assert_eq!(table.put(123, "Alice".to_string()), None);
/// assert!(table.contains(&123));
/// assert_eq!(table.get(&123), "Alice");
/// ```
pub struct HashTable<K, V, B: TableOps<K, V>> {
    slots: Box<[Option<(K, V)>]>,

    occupancy: usize,
    collisions: Cell<u64>,
    rehashes: u64,

    load_threshold: f64,
    growth_factor: usize,

    ops: B,
}

impl<K, V, B: TableOps<K, V>> Debug for HashTable<K, V, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashTable")
            .field("occupancy", &self.occupancy)
            .field("capacity", &self.slots.len())
            .field("collisions", &self.collisions.get())
            .field("rehashes", &self.rehashes)
            .finish_non_exhaustive()
    }
}

impl<K, V, B> Clone for HashTable<K, V, B>
where
    K: Clone,
    V: Clone,
    B: TableOps<K, V> + Clone,
{
    fn clone(&self) -> Self {
        Self {
            slots: self.slots.clone(),
            occupancy: self.occupancy,
            collisions: self.collisions.clone(),
            rehashes: self.rehashes,
            load_threshold: self.load_threshold,
            growth_factor: self.growth_factor,
            ops: self.ops.clone(),
        }
    }
}

impl<K, V, B: TableOps<K, V>> Drop for HashTable<K, V, B> {
    fn drop(&mut self) {
        for slot in self.slots.iter_mut() {
            if let Some((key, value)) = slot.take() {
                self.ops.release(key, value);
            }
        }
    }
}

impl<K, V, B: TableOps<K, V>> HashTable<K, V, B> {
    /// Creates an empty table with the default [`TableConfig`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use probe_hash::hash_table::HashTable;
    /// # use probe_hash::hash_table::TableOps;
    /// #
    /// # struct NumOps;
    /// # impl TableOps<u64, u64> for NumOps {
    /// #     fn hash(&self, key: &u64) -> u64 {
    /// #         key.wrapping_mul(0x9E37_79B9_7F4A_7C15)
    /// #     }
    /// #
    /// #     fn equals(&self, a: &u64, b: &u64) -> bool {
    /// #         a == b
    /// #     }
    /// # }
    /// #
    /// let table: HashTable<u64, u64, NumOps> = HashTable::with_ops(NumOps);
    /// assert!(table.is_empty());
    /// assert_eq!(table.capacity(), 16);
    /// ```
    pub fn with_ops(ops: B) -> Self {
        Self::with_config(TableConfig::default(), ops)
    }

    /// Creates an empty table with an explicit growth policy.
    ///
    /// All slots start empty and every counter starts at zero.
    ///
    /// # Panics
    ///
    /// Panics if the configuration is invalid: a zero `initial_capacity`, a
    /// `load_threshold` outside `(0, 1]`, or a `growth_factor` below 2.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use probe_hash::hash_table::HashTable;
    /// # use probe_hash::hash_table::TableConfig;
    /// # use probe_hash::hash_table::TableOps;
    /// #
    /// # struct NumOps;
    /// # impl TableOps<u64, u64> for NumOps {
    /// #     fn hash(&self, key: &u64) -> u64 {
    /// #         key.wrapping_mul(0x9E37_79B9_7F4A_7C15)
    /// #     }
    /// #
    /// #     fn equals(&self, a: &u64, b: &u64) -> bool {
    /// #         a == b
    /// #     }
    /// # }
    /// #
    /// let config = TableConfig {
    ///     initial_capacity: 4,
    ///     ..TableConfig::default()
    /// };
    /// let table: HashTable<u64, u64, NumOps> = HashTable::with_config(config, NumOps);
    /// assert_eq!(table.capacity(), 4);
    /// ```
    pub fn with_config(config: TableConfig, ops: B) -> Self {
        config.validate();

        Self {
            slots: empty_slots(config.initial_capacity),
            occupancy: 0,
            collisions: Cell::new(0),
            rehashes: 0,
            load_threshold: config.load_threshold,
            growth_factor: config.growth_factor,
            ops,
        }
    }

    /// Returns the number of occupied slots.
    pub fn len(&self) -> usize {
        self.occupancy
    }

    /// Returns `true` if the table contains no entries.
    pub fn is_empty(&self) -> bool {
        self.occupancy == 0
    }

    /// Returns the current slot-array length.
    ///
    /// Unlike a capacity in the `Vec` sense, this counts every slot, not
    /// the number of entries that fit before the next growth event.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns a snapshot of the occupancy and probe counters.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use probe_hash::hash_table::HashTable;
    /// # use probe_hash::hash_table::TableOps;
    /// #
    /// # struct NumOps;
    /// # impl TableOps<u64, u64> for NumOps {
    /// #     fn hash(&self, key: &u64) -> u64 {
    /// #         key.wrapping_mul(0x9E37_79B9_7F4A_7C15)
    /// #     }
    /// #
    /// #     fn equals(&self, a: &u64, b: &u64) -> bool {
    /// #         a == b
    /// #     }
    /// # }
    /// #
    /// let mut table = HashTable::with_ops(NumOps);
    /// table.put(1, 10);
    /// table.put(2, 20);
    ///
    /// let stats = table.stats();
    /// assert_eq!(stats.occupancy, 2);
    /// assert_eq!(stats.capacity, 16);
    /// assert_eq!(stats.rehashes, 0);
    /// ```
    pub fn stats(&self) -> Stats {
        Stats {
            occupancy: self.occupancy,
            capacity: self.slots.len(),
            collisions: self.collisions.get(),
            rehashes: self.rehashes,
        }
    }

    fn count_collision(&self) {
        self.collisions.set(self.collisions.get() + 1);
    }

    fn ideal_index(&self, key: &K) -> usize {
        (self.ops.hash(key) % self.slots.len() as u64) as usize
    }

    /// Returns `true` if an entry with an equivalent key is present.
    ///
    /// Probes consecutive slots from the key's ideal index: the first empty
    /// slot ends the scan with a miss, a matching occupied slot ends it with
    /// a hit, and every non-matching occupied slot visited adds to the
    /// collision counter. The scan visits each slot at most once, so it
    /// terminates even on a table with no empty slots.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use probe_hash::hash_table::HashTable;
    /// # use probe_hash::hash_table::TableOps;
    /// #
    /// # struct NumOps;
    /// # impl TableOps<u64, u64> for NumOps {
    /// #     fn hash(&self, key: &u64) -> u64 {
    /// #         key.wrapping_mul(0x9E37_79B9_7F4A_7C15)
    /// #     }
    /// #
    /// #     fn equals(&self, a: &u64, b: &u64) -> bool {
    /// #         a == b
    /// #     }
    /// # }
    /// #
    /// let mut table = HashTable::with_ops(NumOps);
    /// table.put(7, 70);
    /// assert!(table.contains(&7));
    /// assert!(!table.contains(&8));
    /// ```
    pub fn contains(&self, key: &K) -> bool {
        let capacity = self.slots.len();
        let ideal = self.ideal_index(key);

        for step in 0..capacity {
            match &self.slots[(ideal + step) % capacity] {
                None => return false,
                Some((occupant, _)) if self.ops.equals(key, occupant) => return true,
                Some(_) => self.count_collision(),
            }
        }

        false
    }

    /// Returns a reference to the value stored for `key`.
    ///
    /// Callers establish presence with [`contains`] first; the collision
    /// counting for the probe happened there, so this scan does not count.
    ///
    /// [`contains`]: HashTable::contains
    ///
    /// # Panics
    ///
    /// Panics if no entry with an equivalent key is present. Looking up an
    /// absent key is a contract violation, not a recoverable condition.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use probe_hash::hash_table::HashTable;
    /// # use probe_hash::hash_table::TableOps;
    /// #
    /// # struct NumOps;
    /// # impl TableOps<u64, &'static str> for NumOps {
    /// #     fn hash(&self, key: &u64) -> u64 {
    /// #         key.wrapping_mul(0x9E37_79B9_7F4A_7C15)
    /// #     }
    /// #
    /// #     fn equals(&self, a: &u64, b: &u64) -> bool {
    /// #         a == b
    /// #     }
    /// # }
    /// #
    /// let mut table = HashTable::with_ops(NumOps);
    /// table.put(1, "one");
    /// if table.contains(&1) {
    ///     assert_eq!(*table.get(&1), "one");
    /// }
    /// ```
    pub fn get(&self, key: &K) -> &V {
        let capacity = self.slots.len();
        let ideal = self.ideal_index(key);

        for step in 0..capacity {
            match &self.slots[(ideal + step) % capacity] {
                None => break,
                Some((occupant, value)) if self.ops.equals(key, occupant) => return value,
                Some(_) => {}
            }
        }

        panic!("get called for a key that is not present; check with contains first");
    }

    /// Inserts a key-value pair, returning the previous value if the key was
    /// already present.
    ///
    /// The growth check runs before the pair is placed, on every call: if
    /// the load factor has reached the configured threshold, the slot array
    /// grows by the growth factor and every entry is redistributed by a
    /// fresh probe (one growth event per call at most, counted once in
    /// `rehashes`). Placement then probes from the key's ideal slot; a
    /// matching occupied slot is updated in place and its previous value
    /// returned, otherwise the pair lands in the first empty slot.
    ///
    /// An update keeps the originally inserted key and drops the incoming
    /// duplicate; the previous value is returned to the caller, never passed
    /// to [`TableOps::release`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use probe_hash::hash_table::HashTable;
    /// # use probe_hash::hash_table::TableOps;
    /// #
    /// # struct NumOps;
    /// # impl TableOps<u64, &'static str> for NumOps {
    /// #     fn hash(&self, key: &u64) -> u64 {
    /// #         key.wrapping_mul(0x9E37_79B9_7F4A_7C15)
    /// #     }
    /// #
    /// #     fn equals(&self, a: &u64, b: &u64) -> bool {
    /// #         a == b
    /// #     }
    /// # }
    /// #
    /// let mut table = HashTable::with_ops(NumOps);
    /// assert_eq!(table.put(37, "a"), None);
    /// assert_eq!(table.put(37, "b"), Some("a"));
    /// assert_eq!(table.len(), 1);
    /// ```
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        if self.load_factor() >= self.load_threshold {
            self.grow();
        }

        let capacity = self.slots.len();
        // Growth keeps occupancy strictly below capacity, so the probe below
        // always reaches an empty slot.
        debug_assert!(self.occupancy < capacity);

        let mut index = (self.ops.hash(&key) % capacity as u64) as usize;
        loop {
            match &mut self.slots[index] {
                slot @ None => {
                    *slot = Some((key, value));
                    self.occupancy += 1;
                    return None;
                }
                Some((occupant, stored)) if self.ops.equals(&key, occupant) => {
                    return Some(mem::replace(stored, value));
                }
                Some(_) => {
                    self.collisions.set(self.collisions.get() + 1);
                    index = (index + 1) % capacity;
                }
            }
        }
    }

    fn load_factor(&self) -> f64 {
        self.occupancy as f64 / self.slots.len() as f64
    }

    #[cold]
    fn grow(&mut self) {
        let new_capacity = self
            .slots
            .len()
            .checked_mul(self.growth_factor)
            .expect("capacity overflow");

        let old_slots = mem::replace(&mut self.slots, empty_slots(new_capacity));
        for slot in old_slots.into_vec() {
            let Some((key, value)) = slot else {
                continue;
            };

            let index = self.find_free_slot(&key);
            self.slots[index] = Some((key, value));
        }

        // Occupancy is untouched: a growth event redistributes, it does not
        // add or remove entries.
        self.rehashes += 1;
    }

    fn find_free_slot(&self, key: &K) -> usize {
        let capacity = self.slots.len();
        let mut index = (self.ops.hash(key) % capacity as u64) as usize;

        while self.slots[index].is_some() {
            self.count_collision();
            index = (index + 1) % capacity;
        }

        index
    }

    /// Returns the keys of all occupied slots in slot-array scan order.
    ///
    /// The returned vector is newly allocated and holds exactly
    /// [`len`](HashTable::len) references; the keys themselves stay owned
    /// by the table.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use probe_hash::hash_table::HashTable;
    /// # use probe_hash::hash_table::TableOps;
    /// #
    /// # struct NumOps;
    /// # impl TableOps<u64, u64> for NumOps {
    /// #     fn hash(&self, key: &u64) -> u64 {
    /// #         key.wrapping_mul(0x9E37_79B9_7F4A_7C15)
    /// #     }
    /// #
    /// #     fn equals(&self, a: &u64, b: &u64) -> bool {
    /// #         a == b
    /// #     }
    /// # }
    /// #
    /// let mut table = HashTable::with_ops(NumOps);
    /// table.put(1, 10);
    /// table.put(2, 20);
    /// assert_eq!(table.keys().len(), 2);
    /// ```
    pub fn keys(&self) -> Vec<&K> {
        self.iter().map(|(key, _)| key).collect()
    }

    /// Returns the values of all occupied slots in slot-array scan order.
    ///
    /// Inclusion is decided by slot occupancy alone, so stored values that
    /// happen to look "empty" (zero, an empty string, a `None`-like
    /// payload) are enumerated like any other.
    pub fn values(&self) -> Vec<&V> {
        self.iter().map(|(_, value)| value).collect()
    }

    /// Returns an iterator over all entries in slot-array scan order.
    ///
    /// The order is unspecified beyond being the same consistent scan used
    /// by [`keys`](HashTable::keys) and [`values`](HashTable::values), and
    /// it changes when the table grows.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            slots: self.slots.iter(),
        }
    }
}

impl<K, V, B> HashTable<K, V, B>
where
    B: TableOps<K, V> + EntryFormatter<K, V>,
{
    /// Writes a diagnostic dump of the table into `out`.
    ///
    /// The dump starts with the occupancy, capacity, and cumulative
    /// collision and rehash counters, one per line. With `include_slots`
    /// set, it then lists every slot in order: `i: null` for an empty slot,
    /// or the entry rendered by [`EntryFormatter::write_entry`] in
    /// parentheses. Purely observational; nothing is mutated.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use core::fmt;
    /// # use core::fmt::Write;
    /// #
    /// # use probe_hash::hash_table::EntryFormatter;
    /// # use probe_hash::hash_table::HashTable;
    /// # use probe_hash::hash_table::TableOps;
    /// #
    /// # struct NumOps;
    /// # impl TableOps<u64, u64> for NumOps {
    /// #     fn hash(&self, key: &u64) -> u64 {
    /// #         key.wrapping_mul(0x9E37_79B9_7F4A_7C15)
    /// #     }
    /// #
    /// #     fn equals(&self, a: &u64, b: &u64) -> bool {
    /// #         a == b
    /// #     }
    /// # }
    /// #
    /// # impl EntryFormatter<u64, u64> for NumOps {
    /// #     fn write_entry(&self, key: &u64, value: &u64, out: &mut dyn Write) -> fmt::Result {
    /// #         write!(out, "{key}: {value}")
    /// #     }
    /// # }
    /// #
    /// let table: HashTable<u64, u64, NumOps> = HashTable::with_ops(NumOps);
    ///
    /// let mut rendered = String::new();
    /// table.dump_into(&mut rendered, false).unwrap();
    /// assert!(rendered.starts_with("Occupancy: 0\nCapacity: 16\n"));
    /// ```
    pub fn dump_into(&self, out: &mut dyn Write, include_slots: bool) -> fmt::Result {
        let stats = self.stats();
        writeln!(out, "Occupancy: {}", stats.occupancy)?;
        writeln!(out, "Capacity: {}", stats.capacity)?;
        writeln!(out, "Collisions: {}", stats.collisions)?;
        writeln!(out, "Rehashes: {}", stats.rehashes)?;

        if include_slots {
            for (index, slot) in self.slots.iter().enumerate() {
                match slot {
                    None => writeln!(out, "{index}: null")?,
                    Some((key, value)) => {
                        write!(out, "{index}: (")?;
                        self.ops.write_entry(key, value, out)?;
                        writeln!(out, ")")?;
                    }
                }
            }
        }

        Ok(())
    }

    /// Prints a diagnostic dump to stdout.
    ///
    /// See [`dump_into`](HashTable::dump_into) for the format.
    #[cfg(feature = "std")]
    pub fn dump(&self, include_slots: bool) {
        let mut rendered = String::new();
        self.dump_into(&mut rendered, include_slots)
            .expect("dump formatting failed");
        print!("{rendered}");
    }
}

/// An iterator over a table's occupied slots in scan order.
///
/// This struct is created by the [`iter`] method on [`HashTable`].
///
/// [`iter`]: HashTable::iter
pub struct Iter<'a, K, V> {
    slots: core::slice::Iter<'a, Option<(K, V)>>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.slots.next() {
                Some(Some((key, value))) => return Some((key, value)),
                Some(None) => continue,
                None => return None,
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.slots.len()))
    }
}
