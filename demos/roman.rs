use chain_map::ChainMap;
use clap::Parser;

#[derive(Parser, Debug)]
struct Args {
    /// Roman numeral to convert.
    #[arg(default_value = "MCMXCIV")]
    numeral: String,

    /// Seed for the map's bucket layout.
    #[arg(short, long)]
    seed: Option<u64>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut symbols: ChainMap<char, i64> = match args.seed {
        Some(seed) => ChainMap::with_seed(seed),
        None => ChainMap::new(),
    };
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
    // a duplicate insert is tolerated and keeps the original mapping
    symbols.insert('I', 1);

    println!("symbol table: {symbols}");
    println!(
        "'I' shares its slot with {} other symbol(s)",
        symbols.count(&'I').saturating_sub(1)
    );

    let total = roman_to_integer(&symbols, &args.numeral)?;
    println!("{} = {}", args.numeral, total);
    Ok(())
}

/// Sums symbol values left to right, subtracting a value that precedes a
/// larger one. An unmapped symbol surfaces as `Error::KeyNotFound`.
fn roman_to_integer(symbols: &ChainMap<char, i64>, numeral: &str) -> chain_map::Result<i64> {
    let values = numeral
        .chars()
        .map(|symbol| symbols.search_value(&symbol))
        .collect::<chain_map::Result<Vec<_>>>()?;
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
