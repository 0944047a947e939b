use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::fmt::Write;
use std::hash::Hash;
use std::hash::Hasher;

use clap::Parser;
use probe_hash::HashTable;
use probe_hash::TableConfig;
use probe_hash::TableOps;
use probe_hash::hash_table::EntryFormatter;

#[derive(Parser, Debug)]
struct Args {
    #[arg(short = 'c', long = "initial_capacity", default_value_t = 16)]
    initial_capacity: usize,

    #[arg(short = 'n', long = "count", default_value_t = 100)]
    count: u64,

    /// List every slot of the final table, not just the counters.
    #[arg(long = "slots")]
    slots: bool,
}

struct DemoOps;

impl TableOps<u64, u64> for DemoOps {
    fn hash(&self, key: &u64) -> u64 {
        let mut hasher = DefaultHasher::new();
        key.hash(&mut hasher);
        hasher.finish()
    }

    fn equals(&self, a: &u64, b: &u64) -> bool {
        a == b
    }
}

impl EntryFormatter<u64, u64> for DemoOps {
    fn write_entry(&self, key: &u64, value: &u64, out: &mut dyn Write) -> fmt::Result {
        write!(out, "{key} => {value}")
    }
}

fn main() {
    let args = Args::parse();

    println!(
        "Creating HashTable with initial capacity {} and inserting {} keys",
        args.initial_capacity, args.count
    );

    let config = TableConfig {
        initial_capacity: args.initial_capacity,
        ..TableConfig::default()
    };
    let mut table = HashTable::with_config(config, DemoOps);

    for key in 0..args.count {
        table.put(key, key * key);
    }

    let stats = table.stats();
    stats.print();
    println!(
        "Average collisions per entry: {:.02}",
        if stats.occupancy == 0 {
            0.0
        } else {
            stats.collisions as f64 / stats.occupancy as f64
        }
    );

    println!();
    table.dump(args.slots);
}
