use std::fmt;
use std::fmt::Debug;
use std::fmt::Display;
use std::mem;
use std::ops::RangeInclusive;

use rand::Rng;
use rand::SeedableRng;
use rand::distr::uniform::SampleUniform;
use rand::rngs::SmallRng;

use crate::entry::Entry;
use crate::error::Error;
use crate::error::Result;
use crate::key::NumericKey;

/// Load factor above which an append triggers a rehash.
const FILL_FACTOR: f64 = 0.75;

/// Multiplier applied to the live entry count to size the next slot array.
const GROW_RATIO: f64 = 1.6;

/// Slot count used by the constructors that take no explicit capacity.
const DEFAULT_CAPACITY: usize = 16;

/// A hash map using separate chaining with a randomized multiplicative
/// bucket index.
///
/// `ChainMap<K, V>` stores key-value pairs where keys implement
/// [`NumericKey`]. Each slot of the backing array owns an optional chain of
/// entries; a chain is allocated on the first insert into its slot and
/// released as soon as it empties. The slot for a key is
/// `floor(frac(key * scale_factor) * capacity)`, where the scale factor is a
/// real number drawn once at construction and held fixed for the map's
/// lifetime. Because the index is recomputed against the current capacity on
/// every call, rehashing is transparent to callers.
///
/// Duplicate-key behavior is split across two operations: [`insert`] keeps
/// the first value written (a duplicate insert is a no-op), while
/// [`insert_or_assign`] overwrites in place.
///
/// [`insert`]: ChainMap::insert
/// [`insert_or_assign`]: ChainMap::insert_or_assign
#[derive(Clone)]
pub struct ChainMap<K, V> {
    slots: Vec<Option<Vec<Entry<K, V>>>>,
    len: usize,
    scale_factor: f64,
}

impl<K, V> ChainMap<K, V> {
    /// Creates an empty map with the default capacity and an OS-seeded
    /// bucket layout.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chain_map::ChainMap;
    /// #
    /// let map: ChainMap<i64, String> = ChainMap::new();
    /// assert!(map.is_empty());
    /// ```
    pub fn new() -> Self {
        Self::with_rng(DEFAULT_CAPACITY, &mut SmallRng::from_os_rng())
    }

    /// Creates an empty map with the default capacity and a deterministic
    /// bucket layout derived from `seed`.
    ///
    /// Two maps built from the same seed place every key identically, which
    /// makes layout-sensitive tests reproducible.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chain_map::ChainMap;
    /// #
    /// let mut map: ChainMap<char, u32> = ChainMap::with_seed(7);
    /// map.insert('I', 1);
    /// assert_eq!(map.search_value(&'I'), Ok(1));
    /// ```
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(DEFAULT_CAPACITY, &mut SmallRng::seed_from_u64(seed))
    }

    /// Creates an empty map with the given slot count.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ZeroSize`] if `capacity` is zero; a map with no
    /// slots cannot place any key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chain_map::ChainMap;
    /// # use chain_map::Error;
    /// #
    /// let map = ChainMap::<i64, i64>::with_capacity(64).unwrap();
    /// assert_eq!(map.capacity(), 64);
    ///
    /// assert_eq!(
    ///     ChainMap::<i64, i64>::with_capacity(0).unwrap_err(),
    ///     Error::ZeroSize
    /// );
    /// ```
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::ZeroSize);
        }
        Ok(Self::with_rng(capacity, &mut SmallRng::from_os_rng()))
    }

    /// Creates an empty map with the given slot count and a deterministic
    /// bucket layout derived from `seed`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ZeroSize`] if `capacity` is zero.
    pub fn with_capacity_and_seed(capacity: usize, seed: u64) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::ZeroSize);
        }
        Ok(Self::with_rng(capacity, &mut SmallRng::seed_from_u64(seed)))
    }

    fn with_rng(capacity: usize, rng: &mut SmallRng) -> Self {
        debug_assert!(capacity > 0);
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || None);
        Self {
            slots,
            len: 0,
            scale_factor: rng.random(),
        }
    }

    /// Returns the number of live entries in the map.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the map contains no entries.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the current slot count.
    ///
    /// Growth re-buckets every entry against a fresh slot array, so this
    /// value changes over the map's lifetime.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the ratio of live entries to slots.
    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.slots.len() as f64
    }
}

impl<K, V> ChainMap<K, V>
where
    K: NumericKey,
{
    /// Maps a key to a slot in the current array.
    ///
    /// The product of the key's integer image and the scale factor is folded
    /// into `[0, 1)` before scaling by the capacity, so negative and large
    /// keys stay in range. Recomputed on every operation, never cached.
    fn slot_index(&self, key: K) -> usize {
        let capacity = self.slots.len();
        let scaled = key.to_numeric() as f64 * self.scale_factor;
        let folded = scaled.rem_euclid(1.0);
        ((folded * capacity as f64) as usize).min(capacity - 1)
    }

    /// Inserts a key-value pair, keeping the existing value if the key is
    /// already present.
    ///
    /// A duplicate insert is a silent no-op: the first value written for a
    /// key survives until it is overwritten by [`insert_or_assign`] or
    /// erased. Appending an entry may trigger a rehash once the load factor
    /// passes 0.75.
    ///
    /// [`insert_or_assign`]: ChainMap::insert_or_assign
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chain_map::ChainMap;
    /// #
    /// let mut map = ChainMap::with_seed(7);
    /// map.insert(1, "a");
    /// map.insert(1, "b");
    ///
    /// assert_eq!(map.search_value(&1), Ok("a"));
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn insert(&mut self, key: K, value: V) {
        let index = self.slot_index(key);
        let chain = self.slots[index].get_or_insert_with(Vec::new);
        if chain.iter().any(|entry| entry.key() == key) {
            return;
        }
        chain.push(Entry::new(key, value));
        self.len += 1;
        if self.load_factor() > FILL_FACTOR {
            self.grow();
        }
    }

    /// Inserts a key-value pair, overwriting the value in place if the key
    /// is already present.
    ///
    /// The overwrite does not change the entry's slot or the map's length.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chain_map::ChainMap;
    /// #
    /// let mut map = ChainMap::with_seed(7);
    /// map.insert_or_assign(1, "a");
    /// map.insert_or_assign(1, "b");
    ///
    /// assert_eq!(map.search_value(&1), Ok("b"));
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn insert_or_assign(&mut self, key: K, value: V) {
        let index = self.slot_index(key);
        let chain = self.slots[index].get_or_insert_with(Vec::new);
        if let Some(entry) = chain.iter_mut().find(|entry| entry.key() == key) {
            entry.set_value(value);
            return;
        }
        chain.push(Entry::new(key, value));
        self.len += 1;
        if self.load_factor() > FILL_FACTOR {
            self.grow();
        }
    }

    /// Returns a reference to the entry holding `key`, or `None` if the key
    /// is absent.
    ///
    /// Absence is a normal outcome here; the value-returning
    /// [`search_value`] reports the same miss as a hard error.
    ///
    /// [`search_value`]: ChainMap::search_value
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chain_map::ChainMap;
    /// #
    /// let mut map = ChainMap::with_seed(7);
    /// map.insert(1, "a");
    ///
    /// assert_eq!(map.search(&1).map(|entry| entry.key()), Some(1));
    /// assert!(map.search(&2).is_none());
    /// ```
    pub fn search(&self, key: &K) -> Option<&Entry<K, V>> {
        let index = self.slot_index(*key);
        self.slots[index]
            .as_ref()?
            .iter()
            .find(|entry| entry.key() == *key)
    }

    /// Returns a mutable reference to the entry holding `key`, or `None` if
    /// the key is absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chain_map::ChainMap;
    /// #
    /// let mut map = ChainMap::with_seed(7);
    /// map.insert(1, "a");
    ///
    /// if let Some(entry) = map.search_mut(&1) {
    ///     entry.set_value("b");
    /// }
    /// assert_eq!(map.search_value(&1), Ok("b"));
    /// ```
    pub fn search_mut(&mut self, key: &K) -> Option<&mut Entry<K, V>> {
        let index = self.slot_index(*key);
        self.slots[index]
            .as_mut()?
            .iter_mut()
            .find(|entry| entry.key() == *key)
    }

    /// Returns a copy of the value stored for `key`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::KeyNotFound`] if the key is absent. Callers that
    /// want a soft miss use [`search`] instead.
    ///
    /// [`search`]: ChainMap::search
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chain_map::ChainMap;
    /// # use chain_map::Error;
    /// #
    /// let mut map = ChainMap::with_seed(7);
    /// map.insert('V', 5);
    ///
    /// assert_eq!(map.search_value(&'V'), Ok(5));
    /// assert_eq!(map.search_value(&'Z'), Err(Error::KeyNotFound));
    /// ```
    pub fn search_value(&self, key: &K) -> Result<V>
    where
        V: Clone,
    {
        self.search(key)
            .map(|entry| entry.value().clone())
            .ok_or(Error::KeyNotFound)
    }

    /// Returns `true` if any live entry holds `value`.
    ///
    /// This is a membership test by value, not by key: every slot and chain
    /// is scanned until a match is found, O(capacity + len).
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chain_map::ChainMap;
    /// #
    /// let mut map = ChainMap::with_seed(7);
    /// map.insert(1, "a");
    ///
    /// assert!(map.contains(&"a"));
    /// assert!(!map.contains(&"b"));
    /// ```
    pub fn contains(&self, value: &V) -> bool
    where
        V: PartialEq,
    {
        self.iter().any(|(_, candidate)| candidate == value)
    }

    /// Removes the entry holding `key`, if present.
    ///
    /// A miss is a silent no-op. Removing the last entry of a chain releases
    /// the chain's storage and clears its slot.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chain_map::ChainMap;
    /// #
    /// let mut map = ChainMap::with_seed(7);
    /// map.insert(1, "a");
    ///
    /// map.erase(&1);
    /// assert!(map.search(&1).is_none());
    ///
    /// map.erase(&1); // absent key, nothing happens
    /// assert!(map.is_empty());
    /// ```
    pub fn erase(&mut self, key: &K) {
        let index = self.slot_index(*key);
        let Some(chain) = self.slots[index].as_mut() else {
            return;
        };
        let Some(position) = chain.iter().position(|entry| entry.key() == *key) else {
            return;
        };
        chain.remove(position);
        self.len -= 1;
        if chain.is_empty() {
            self.slots[index] = None;
        }
    }

    /// Returns the number of entries sharing the slot that `key` maps to.
    ///
    /// This is a collision-count probe, not a membership test: the result
    /// is the chain length at the key's slot, whether or not the key itself
    /// is present. An empty or unallocated slot yields zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chain_map::ChainMap;
    /// #
    /// let map: ChainMap<i64, i64> = ChainMap::with_seed(7);
    /// assert_eq!(map.count(&1), 0);
    /// ```
    pub fn count(&self, key: &K) -> usize {
        let index = self.slot_index(*key);
        self.slots[index].as_ref().map_or(0, Vec::len)
    }

    /// Returns an iterator over the map's key-value pairs.
    ///
    /// Pairs are yielded slot-major, in chain order within a slot. The order
    /// is stable between mutations but is otherwise arbitrary, since it
    /// depends on the random bucket layout.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chain_map::ChainMap;
    /// #
    /// let mut map = ChainMap::with_seed(7);
    /// map.insert(1, "one");
    /// map.insert(2, "two");
    ///
    /// assert_eq!(map.iter().count(), 2);
    /// ```
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            slots: self.slots.iter(),
            chain: Default::default(),
        }
    }

    /// Re-buckets every entry into a slot array sized from the live entry
    /// count.
    ///
    /// The new capacity is `floor(len * 1.6)`. Entries move into the slots
    /// the index function computes against the new capacity, the new array
    /// replaces the old one, and the old chains are released.
    fn grow(&mut self) {
        let new_capacity = ((self.len as f64 * GROW_RATIO) as usize).max(1);
        let mut slots = Vec::with_capacity(new_capacity);
        slots.resize_with(new_capacity, || None);
        for chain in mem::replace(&mut self.slots, slots).into_iter().flatten() {
            for entry in chain {
                let index = self.slot_index(entry.key());
                self.slots[index].get_or_insert_with(Vec::new).push(entry);
            }
        }
    }
}

impl<K, V> ChainMap<K, V>
where
    K: NumericKey + Display,
    V: Display,
{
    /// Writes the `{k1: v1, k2: v2}` dump of the map to stdout.
    ///
    /// Pair order follows [`iter`] and carries no guarantee across maps or
    /// capacities.
    ///
    /// [`iter`]: ChainMap::iter
    pub fn print(&self) {
        println!("{self}");
    }
}

impl<K, V> ChainMap<K, V>
where
    K: NumericKey + SampleUniform + PartialOrd,
    V: SampleUniform + PartialOrd + Clone,
{
    /// Creates a map pre-populated with `len` random key-value pairs drawn
    /// uniformly from the given inclusive ranges.
    ///
    /// Duplicate random keys follow the first-write-wins rule of
    /// [`insert`], so the resulting [`len`] may be below the requested
    /// count.
    ///
    /// [`insert`]: ChainMap::insert
    /// [`len`]: ChainMap::len
    ///
    /// # Errors
    ///
    /// Returns [`Error::ZeroSize`] if `len` is zero, before any entry is
    /// generated.
    ///
    /// # Panics
    ///
    /// Panics if either range is empty (`start > end`).
    pub fn random(len: usize, keys: RangeInclusive<K>, values: RangeInclusive<V>) -> Result<Self> {
        Self::random_from(len, keys, values, &mut SmallRng::from_os_rng())
    }

    /// Creates a randomly pre-populated map with a deterministic layout and
    /// fill derived from `seed`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ZeroSize`] if `len` is zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chain_map::ChainMap;
    /// #
    /// let map = ChainMap::random_with_seed(100, 0..=500i64, 0..=9i64, 42).unwrap();
    /// assert!(map.len() <= 100);
    /// assert!(!map.is_empty());
    /// ```
    pub fn random_with_seed(
        len: usize,
        keys: RangeInclusive<K>,
        values: RangeInclusive<V>,
        seed: u64,
    ) -> Result<Self> {
        Self::random_from(len, keys, values, &mut SmallRng::seed_from_u64(seed))
    }

    fn random_from(
        len: usize,
        keys: RangeInclusive<K>,
        values: RangeInclusive<V>,
        rng: &mut SmallRng,
    ) -> Result<Self> {
        if len == 0 {
            return Err(Error::ZeroSize);
        }
        let mut map = Self::with_rng(len, rng);
        for _ in 0..len {
            let key = rng.random_range(keys.clone());
            let value = rng.random_range(values.clone());
            map.insert(key, value);
        }
        Ok(map)
    }
}

impl<K, V> Default for ChainMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Debug for ChainMap<K, V>
where
    K: NumericKey + Debug,
    V: Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (key, value) in self.iter() {
            map.entry(&key, value);
        }
        map.finish()
    }
}

impl<K, V> Display for ChainMap<K, V>
where
    K: NumericKey + Display,
    V: Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (position, (key, value)) in self.iter().enumerate() {
            if position > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{key}: {value}")?;
        }
        write!(f, "}}")
    }
}

/// An iterator over the key-value pairs of a `ChainMap`.
///
/// Created by the [`iter`] method; yields pairs slot-major, in chain order
/// within a slot.
///
/// [`iter`]: ChainMap::iter
pub struct Iter<'a, K, V> {
    slots: std::slice::Iter<'a, Option<Vec<Entry<K, V>>>>,
    chain: std::slice::Iter<'a, Entry<K, V>>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V>
where
    K: NumericKey,
{
    type Item = (K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.chain.next() {
                return Some((entry.key(), entry.value()));
            }
            match self.slots.next()? {
                Some(chain) => self.chain = chain.iter(),
                None => continue,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_map_is_empty() {
        let map: ChainMap<i64, i64> = ChainMap::new();
        assert!(map.is_empty());
        assert_eq!(map.len(), 0);
        assert_eq!(map.capacity(), DEFAULT_CAPACITY);

        let map: ChainMap<i64, i64> = ChainMap::default();
        assert!(map.is_empty());
    }

    #[test]
    fn zero_capacity_is_rejected() {
        assert_eq!(
            ChainMap::<i64, i64>::with_capacity(0).unwrap_err(),
            Error::ZeroSize
        );
        assert_eq!(
            ChainMap::<i64, i64>::with_capacity_and_seed(0, 7).unwrap_err(),
            Error::ZeroSize
        );
    }

    #[test]
    fn insert_keeps_first_value() {
        let mut map = ChainMap::with_seed(7);
        map.insert(1, "first");
        map.insert(1, "second");

        assert_eq!(map.search_value(&1), Ok("first"));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn len_counts_distinct_keys() {
        let mut map = ChainMap::with_seed(7);
        for key in 0..50i64 {
            map.insert(key, key * 2);
        }
        for key in 0..25i64 {
            map.insert(key, -1);
        }

        assert_eq!(map.len(), 50);
        for key in 0..50i64 {
            assert_eq!(map.search_value(&key), Ok(key * 2));
        }
    }

    #[test]
    fn insert_or_assign_overwrites_in_place() {
        let mut map = ChainMap::with_seed(7);
        map.insert_or_assign(1, "a");
        map.insert_or_assign(1, "b");
        map.insert_or_assign(1, "b");

        assert_eq!(map.search_value(&1), Ok("b"));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn search_miss_is_soft() {
        let mut map = ChainMap::with_seed(7);
        map.insert(1, "a");

        assert!(map.search(&2).is_none());
        let entry = map.search(&1).unwrap();
        assert_eq!(entry.key(), 1);
        assert_eq!(*entry.value(), "a");
    }

    #[test]
    fn search_mut_allows_value_overwrite() {
        let mut map = ChainMap::with_seed(7);
        map.insert(1, 10);

        map.search_mut(&1).unwrap().set_value(20);
        assert_eq!(map.search_value(&1), Ok(20));
        assert!(map.search_mut(&2).is_none());
    }

    #[test]
    fn search_value_miss_is_hard() {
        let mut map = ChainMap::with_seed(7);
        map.insert(1, "a");

        assert_eq!(map.search_value(&1), Ok("a"));
        assert_eq!(map.search_value(&2), Err(Error::KeyNotFound));
    }

    #[test]
    fn erase_removes_and_tolerates_absence() {
        let mut map = ChainMap::with_seed(7);
        map.insert(1, "a");
        map.insert(2, "b");

        map.erase(&1);
        assert_eq!(map.len(), 1);
        assert!(map.search(&1).is_none());
        assert_eq!(map.search_value(&2), Ok("b"));

        map.erase(&1);
        map.erase(&99);
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn erase_releases_empty_chain() {
        let mut map = ChainMap::with_seed(7);
        map.insert(1i64, "a");
        let index = map.slot_index(1);
        assert!(map.slots[index].is_some());

        map.erase(&1);
        assert!(map.slots[index].is_none());
        assert_eq!(map.count(&1), 0);
    }

    #[test]
    fn contains_compares_by_value() {
        let mut map = ChainMap::with_seed(7);
        map.insert(1, "a");
        map.insert(2, "b");

        assert!(map.contains(&"a"));
        assert!(map.contains(&"b"));
        assert!(!map.contains(&"c"));

        map.insert_or_assign(1, "c");
        assert!(!map.contains(&"a"));
        assert!(map.contains(&"c"));

        map.erase(&2);
        assert!(!map.contains(&"b"));
    }

    #[test]
    fn count_reports_chain_length() {
        let mut map: ChainMap<i64, i64> = ChainMap::with_capacity_and_seed(8, 42).unwrap();
        let slot = map.slot_index(0);
        let collider = (1..10_000)
            .find(|&key| map.slot_index(key) == slot)
            .unwrap();
        let absent_collider = (collider + 1..10_000)
            .find(|&key| map.slot_index(key) == slot)
            .unwrap();
        let elsewhere = (1..10_000)
            .find(|&key| map.slot_index(key) != slot)
            .unwrap();

        map.insert(0, 1);
        map.insert(collider, 2);

        assert_eq!(map.count(&0), 2);
        assert_eq!(map.count(&collider), 2);
        // probes the slot's chain even though this key was never inserted
        assert_eq!(map.count(&absent_collider), 2);
        assert_eq!(map.count(&elsewhere), 0);
    }

    #[test]
    fn growth_preserves_every_entry() {
        let mut map = ChainMap::with_seed(7);
        let initial_capacity = map.capacity();
        for key in 0..20i64 {
            map.insert(key, key * 3);
        }

        assert_eq!(map.len(), 20);
        assert!(map.capacity() > initial_capacity);
        assert!(map.load_factor() <= FILL_FACTOR);
        for key in 0..20i64 {
            assert_eq!(map.search_value(&key), Ok(key * 3));
            assert!(map.count(&key) >= 1);
        }
    }

    #[test]
    fn negative_keys_stay_in_range() {
        let mut map = ChainMap::with_seed(7);
        for key in [-1i64, -42, -1_000_000, i64::MIN + 1] {
            map.insert(key, key);
        }
        for key in [-1i64, -42, -1_000_000, i64::MIN + 1] {
            assert_eq!(map.search_value(&key), Ok(key));
        }
    }

    #[test]
    fn char_keys_work() {
        let mut map = ChainMap::with_seed(7);
        map.insert('a', 1);
        map.insert('é', 2);

        assert_eq!(map.search_value(&'a'), Ok(1));
        assert_eq!(map.search_value(&'é'), Ok(2));
        assert_eq!(map.search_value(&'z'), Err(Error::KeyNotFound));
    }

    #[test]
    fn same_seed_same_layout() {
        let build = || {
            let mut map = ChainMap::with_seed(99);
            for key in 0..30i64 {
                map.insert(key, key + 100);
            }
            map
        };
        let a = build();
        let b = build();

        assert_eq!(a.scale_factor.to_bits(), b.scale_factor.to_bits());
        let pairs_a: Vec<_> = a.iter().map(|(k, v)| (k, *v)).collect();
        let pairs_b: Vec<_> = b.iter().map(|(k, v)| (k, *v)).collect();
        assert_eq!(pairs_a, pairs_b);
    }

    #[test]
    fn clone_is_a_deep_copy() {
        let mut original = ChainMap::with_seed(7);
        for key in 0..10i64 {
            original.insert(key, key);
        }

        let mut copy = original.clone();
        assert_eq!(copy.scale_factor.to_bits(), original.scale_factor.to_bits());
        for key in 0..10i64 {
            assert_eq!(copy.search_value(&key), Ok(key));
        }

        copy.erase(&0);
        copy.insert(100, 100);
        assert_eq!(original.search_value(&0), Ok(0));
        assert!(original.search(&100).is_none());

        original.erase(&1);
        assert_eq!(copy.search_value(&1), Ok(1));
    }

    #[test]
    fn random_prefill_draws_from_ranges() {
        let map = ChainMap::random_with_seed(200, 0..=100i64, -5..=5i64, 42).unwrap();

        assert!(!map.is_empty());
        assert!(map.len() <= 200);
        assert_eq!(map.iter().count(), map.len());
        for (key, value) in map.iter() {
            assert!((0..=100).contains(&key));
            assert!((-5..=5).contains(value));
        }
    }

    #[test]
    fn random_prefill_of_zero_is_rejected() {
        assert_eq!(
            ChainMap::random_with_seed(0, 0..=10i64, 0..=10i64, 42).unwrap_err(),
            Error::ZeroSize
        );
    }

    #[test]
    fn display_lists_pairs_in_braces() {
        let mut map = ChainMap::with_seed(7);
        assert_eq!(map.to_string(), "{}");

        map.insert(1i64, "one");
        assert_eq!(map.to_string(), "{1: one}");

        map.insert(2, "two");
        let dump = map.to_string();
        assert!(dump.starts_with('{') && dump.ends_with('}'));
        assert!(dump.contains(", "));
        assert!(dump.contains("1: one"));
        assert!(dump.contains("2: two"));
    }

    #[test]
    fn debug_formats_as_map() {
        let mut map = ChainMap::with_seed(7);
        map.insert(1i64, "one");
        assert_eq!(format!("{map:?}"), r#"{1: "one"}"#);
    }

    fn roman_to_integer(symbols: &ChainMap<char, i64>, numeral: &str) -> Result<i64> {
        let values = numeral
            .chars()
            .map(|symbol| symbols.search_value(&symbol))
            .collect::<Result<Vec<_>>>()?;
        let mut total = 0;
        for (position, value) in values.iter().enumerate() {
            if values.get(position + 1).is_some_and(|next| next > value) {
                total -= *value;
            } else {
                total += *value;
            }
        }
        Ok(total)
    }

    #[test]
    fn roman_numeral_lookup_table() {
        let mut symbols = ChainMap::with_seed(7);
        for (symbol, value) in [
            ('I', 1),
            ('V', 5),
            ('X', 10),
            ('L', 50),
            ('C', 100),
            ('D', 500),
            ('M', 1000),
        ] {
            symbols.insert(symbol, value);
        }
        // re-inserting a known symbol is tolerated and changes nothing
        symbols.insert('I', 1);
        assert_eq!(symbols.len(), 7);

        assert_eq!(roman_to_integer(&symbols, "XIX"), Ok(19));
        assert_eq!(roman_to_integer(&symbols, "IX"), Ok(9));
        assert_eq!(roman_to_integer(&symbols, "MCMXCIV"), Ok(1994));
        assert_eq!(roman_to_integer(&symbols, "MCQ"), Err(Error::KeyNotFound));
    }

    #[test]
    fn every_entry_sits_in_its_computed_slot() {
        let mut map = ChainMap::with_seed(13);
        for key in 0..40i64 {
            map.insert(key, key);
        }

        for (index, slot) in map.slots.iter().enumerate() {
            let Some(chain) = slot else { continue };
            assert!(!chain.is_empty());
            for entry in chain {
                assert_eq!(map.slot_index(entry.key()), index);
            }
        }
    }
}
