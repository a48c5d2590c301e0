use optcell::{EmptyError, Optional, TrivialOptional, NULLOPT};

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct Config {
    name: String,
    retries: u8,
}

impl Config {
    fn parse(line: &str) -> Result<Self, String> {
        let (name, retries) = line.split_once('=').ok_or_else(|| format!("missing '=' in {line:?}"))?;
        let retries = retries.trim().parse().map_err(|e| format!("bad retries: {e}"))?;
        Ok(Self {
            name: name.trim().to_owned(),
            retries,
        })
    }
}

fn main() -> Result<(), EmptyError> {
    println!("=== optcell basic usage ===\n");

    // Trivial payloads: the optional is `Copy` and as small as (T, bool).
    let mut counter: TrivialOptional<u32> = Optional::new();
    println!("counter empty: {}", counter.is_none());
    counter.emplace(41);
    *counter += 1;
    let snapshot = counter;
    counter.reset();
    println!("snapshot after reset of original: {snapshot:?}");

    // Managed payloads: constructed in place, dropped exactly once.
    let mut config: Optional<Config> = NULLOPT.into();
    for line in ["primary = 3", "broken", "fallback = 1"] {
        let outcome = config
            .try_emplace_with(|| Config::parse(line))
            .map(|cfg| cfg.name.clone());
        match outcome {
            Ok(name) => println!("parsed {name}"),
            Err(err) => println!("rejected {line:?}: {err} (optional now empty: {})", config.is_none()),
        }
    }

    let backup = config.clone();
    config.value_mut().retries += 1;
    println!("config {:?}\nbackup {:?}", config, backup);
    println!("backup < config: {}", backup < config);

    // Empty sorts first.
    let mut slots: Vec<Optional<i32>> = vec![Optional::some(3), Optional::none(), Optional::some(1)];
    slots.sort();
    println!("sorted: {slots:?}");

    let empty: Optional<Config> = Optional::new();
    match empty.try_value() {
        Ok(cfg) => println!("unexpected value {cfg:?}"),
        Err(err) => println!("checked access: {err}"),
    }

    println!("retries: {}", config.try_value()?.retries);
    Ok(())
}
