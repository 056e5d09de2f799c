use std::collections::{BTreeMap, HashMap, VecDeque};

use crate::lockfile::Package;

/// Name-keyed accumulator of packages. Keys are normalized names, inserts
/// overwrite duplicates, and iteration order is lexicographic by key --
/// the renderers rely on that ordering.
pub type Bucket = BTreeMap<String, Package>;

/// Collect every snapshot package, keyed by normalized name. Later entries
/// overwrite earlier ones with the same name.
pub fn collect_all(packages: &[Package]) -> Bucket {
    let mut bucket = Bucket::new();
    for package in packages {
        bucket.insert(package.normalized_name(), package.clone());
    }
    bucket
}

/// Compute the set of packages reachable from the root through `requires`
/// edges. Dev requirements are never consulted, and a required name with no
/// matching package in the snapshot is skipped without an error.
pub fn required_closure(packages: &[Package], root: &Package) -> Bucket {
    let mut by_name: HashMap<String, &Package> = HashMap::new();
    for package in packages {
        by_name.insert(package.normalized_name(), package);
    }

    let mut bucket = Bucket::new();
    let mut queue: VecDeque<String> = root.requires.keys().map(|name| name.to_lowercase()).collect();

    // The bucket doubles as the visited set, so circular and self-referential
    // requires terminate once every reachable name has been inserted.
    while let Some(name) = queue.pop_front() {
        if bucket.contains_key(&name) {
            continue;
        }
        let package = match by_name.get(&name) {
            Some(package) => *package,
            None => continue,
        };
        queue.extend(package.requires.keys().map(|name| name.to_lowercase()));
        bucket.insert(name, package.clone());
    }

    bucket
}
