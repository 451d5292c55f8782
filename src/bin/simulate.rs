use lotto::env_config::{base_path, enter_base_path, init_rayon_threads};
use lotto::simulation::{save_statistics, simulate_batch};

const USAGE: &str = "Usage: lotto-simulate [--sessions N] [--tickets T] [--seed S] [--output FILE]";

struct Args {
    sessions: usize,
    tickets: usize,
    seed: u64,
    output: Option<String>,
}

fn parse_value<T: std::str::FromStr>(flag: &str, value: Option<&String>) -> T {
    let Some(raw) = value else {
        eprintln!("Missing value for {}", flag);
        std::process::exit(1);
    };
    raw.parse().unwrap_or_else(|_| {
        eprintln!("Invalid {} value: {}", flag, raw);
        std::process::exit(1);
    })
}

fn parse_args() -> Args {
    let args: Vec<String> = std::env::args().collect();
    let mut parsed = Args {
        sessions: 10_000,
        tickets: 5,
        seed: 42,
        output: None,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--sessions" => {
                i += 1;
                parsed.sessions = parse_value("--sessions", args.get(i));
            }
            "--tickets" => {
                i += 1;
                parsed.tickets = parse_value("--tickets", args.get(i));
            }
            "--seed" => {
                i += 1;
                parsed.seed = parse_value("--seed", args.get(i));
            }
            "--output" => {
                i += 1;
                parsed.output = Some(parse_value("--output", args.get(i)));
            }
            "--help" | "-h" => {
                println!("{}", USAGE);
                println!();
                println!("Options:");
                println!("  --sessions N   Number of sessions to simulate (default: 10000)");
                println!("  --tickets T    Tickets bought per session (default: 5)");
                println!("  --seed S       RNG seed (default: 42)");
                println!("  --output FILE  Write statistics JSON to FILE");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                eprintln!("{}", USAGE);
                std::process::exit(1);
            }
        }
        i += 1;
    }

    if parsed.tickets == 0 {
        eprintln!("Error: --tickets must be at least 1");
        std::process::exit(1);
    }
    parsed
}

fn main() {
    let base = base_path();
    match enter_base_path(&base) {
        Ok(workdir) => println!("Working directory: {}", workdir.display()),
        Err(e) => {
            eprintln!("Failed to enter {}: {}", base.display(), e);
            std::process::exit(1);
        }
    }
    let args = parse_args();
    init_rayon_threads();

    println!(
        "Lotto Simulation ({} sessions x {} tickets, seed {})",
        args.sessions, args.tickets, args.seed
    );

    let result = simulate_batch(args.sessions, args.tickets, args.seed);

    println!(
        "Simulated {} tickets in {:.2} ms",
        result.total_tickets,
        result.elapsed.as_secs_f64() * 1000.0
    );
    println!("  Spent: {}", result.total_spent);
    for (prize, rate) in result.prizes.iter().zip(&result.tier_rates) {
        println!(
            "  {:<10} {:>10}  ({:.5}%)",
            prize.label,
            prize.count,
            rate.rate * 100.0
        );
    }
    if let Some(n) = result.most_frequent_number {
        println!("  Most frequent winning number: {}", n);
    }

    if let Some(path) = args.output {
        match save_statistics(&result, &path) {
            Ok(()) => println!("Statistics written to {}", path),
            Err(e) => {
                eprintln!("Failed to write {}: {}", path, e);
                std::process::exit(1);
            }
        }
    }
}
