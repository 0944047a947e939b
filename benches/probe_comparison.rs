use core::hash::Hash;
use core::hash::Hasher;
use core::hint::black_box;

use criterion::AxisScale;
use criterion::BatchSize;
use criterion::Criterion;
use criterion::PlotConfiguration;
use criterion::Throughput;
use criterion::criterion_group;
use criterion::criterion_main;
use hashbrown::hash_table::Entry as HashbrownEntry;
use hashbrown::hash_table::HashTable as HashbrownHashTable;
use probe_hash::hash_table::HashTable as ProbeHashTable;
use probe_hash::hash_table::TableOps;
use rand::SeedableRng;
use rand::TryRngCore;
use rand::rngs::OsRng;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand_distr::Distribution;
use rand_distr::Zipf;
use siphasher::sip::SipHasher;

#[derive(Clone, Copy)]
struct SipKeys {
    k0: u64,
    k1: u64,
}

impl SipKeys {
    fn random() -> Self {
        let mut rng = OsRng;
        Self {
            k0: rng.try_next_u64().unwrap(),
            k1: rng.try_next_u64().unwrap(),
        }
    }

    fn hash_u64(&self, key: u64) -> u64 {
        let mut hasher = SipHasher::new_with_keys(self.k0, self.k1);
        key.hash(&mut hasher);
        hasher.finish()
    }
}

struct SipOps {
    keys: SipKeys,
}

impl TableOps<u64, u64> for SipOps {
    fn hash(&self, key: &u64) -> u64 {
        self.keys.hash_u64(*key)
    }

    fn equals(&self, a: &u64, b: &u64) -> bool {
        a == b
    }
}

const SIZES: &[usize] = &[(1 << 10), (1 << 13), (1 << 16)];

fn random_keys(count: usize) -> Vec<u64> {
    let mut rng = OsRng;
    (0..count).map(|_| rng.try_next_u64().unwrap()).collect()
}

fn build_hashbrown(keys: &[u64], sip: SipKeys) -> HashbrownHashTable<(u64, u64)> {
    let mut table = HashbrownHashTable::with_capacity(keys.len());
    for &key in keys {
        let hash = sip.hash_u64(key);
        match table.entry(hash, |&(k, _): &(u64, u64)| k == key, |&(k, _)| sip.hash_u64(k)) {
            HashbrownEntry::Vacant(entry) => {
                entry.insert((key, key));
            }
            HashbrownEntry::Occupied(_) => {}
        }
    }
    table
}

fn bench_insert_random(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_random_u64");
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));

    for &size in SIZES {
        let keys = random_keys(size);

        group.throughput(Throughput::Elements(size as u64));
        group.bench_function(format!("probe_hash/{size}"), |b| {
            let sip = SipKeys::random();
            b.iter_batched(
                || {
                    let mut keys = keys.clone();
                    keys.shuffle(&mut SmallRng::from_os_rng());
                    keys
                },
                |keys| {
                    let mut table = ProbeHashTable::with_ops(SipOps { keys: sip });
                    for key in keys {
                        black_box(table.put(key, key));
                    }
                    black_box(table)
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_function(format!("hashbrown/{size}"), |b| {
            let sip = SipKeys::random();
            b.iter_batched(
                || {
                    let mut keys = keys.clone();
                    keys.shuffle(&mut SmallRng::from_os_rng());
                    keys
                },
                |keys| {
                    let mut table = HashbrownHashTable::with_capacity(0);
                    for key in keys {
                        let hash = sip.hash_u64(key);
                        match table.entry(
                            hash,
                            |&(k, _): &(u64, u64)| k == key,
                            |&(k, _)| sip.hash_u64(k),
                        ) {
                            HashbrownEntry::Vacant(entry) => {
                                black_box(entry.insert((key, key)));
                            }
                            HashbrownEntry::Occupied(_) => {}
                        }
                    }
                    black_box(table)
                },
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

fn bench_find_hit_miss(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_hit_miss_u64");
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));

    for &size in SIZES {
        let keys = random_keys(size);
        let sip = SipKeys::random();

        let mut probe = ProbeHashTable::with_ops(SipOps { keys: sip });
        for &key in &keys {
            probe.put(key, key);
        }
        let brown = build_hashbrown(&keys, sip);

        // Half the queries hit, half miss.
        let mut queries = keys
            .iter()
            .copied()
            .take(size / 2)
            .chain(random_keys(size / 2))
            .collect::<Vec<_>>();
        queries.shuffle(&mut SmallRng::from_os_rng());

        group.throughput(Throughput::Elements(queries.len() as u64));
        group.bench_function(format!("probe_hash/{size}"), |b| {
            b.iter(|| {
                let mut hits = 0usize;
                for key in &queries {
                    if probe.contains(key) {
                        hits += 1;
                    }
                }
                black_box(hits)
            })
        });

        group.bench_function(format!("hashbrown/{size}"), |b| {
            b.iter(|| {
                let mut hits = 0usize;
                for &key in &queries {
                    if brown
                        .find(sip.hash_u64(key), |&(k, _): &(u64, u64)| k == key)
                        .is_some()
                    {
                        hits += 1;
                    }
                }
                black_box(hits)
            })
        });
    }

    group.finish();
}

fn bench_find_zipf(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_zipf_u64");
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));

    for &size in SIZES {
        let keys = random_keys(size);
        let sip = SipKeys::random();

        let mut probe = ProbeHashTable::with_ops(SipOps { keys: sip });
        for &key in &keys {
            probe.put(key, key);
        }
        let brown = build_hashbrown(&keys, sip);

        let zipf = Zipf::new(size as f64, 1.1).unwrap();
        let mut rng = SmallRng::from_os_rng();
        let queries = (0..size)
            .map(|_| {
                let index = (zipf.sample(&mut rng) as usize).clamp(1, size) - 1;
                keys[index]
            })
            .collect::<Vec<_>>();

        group.throughput(Throughput::Elements(queries.len() as u64));
        group.bench_function(format!("probe_hash/{size}"), |b| {
            b.iter(|| {
                let mut hits = 0usize;
                for key in &queries {
                    if probe.contains(key) {
                        hits += 1;
                    }
                }
                black_box(hits)
            })
        });

        group.bench_function(format!("hashbrown/{size}"), |b| {
            b.iter(|| {
                let mut hits = 0usize;
                for &key in &queries {
                    if brown
                        .find(sip.hash_u64(key), |&(k, _): &(u64, u64)| k == key)
                        .is_some()
                    {
                        hits += 1;
                    }
                }
                black_box(hits)
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_insert_random,
    bench_find_hit_miss,
    bench_find_zipf
);
criterion_main!(benches);
