use grid_search::{GridConfig, Session, Strategy};

// Generates a seeded 20x20 maze and runs every strategy on it, printing each run's summary and
// the share of all explored cells it accounts for.
fn main() -> grid_search::Result<()> {
    let config = GridConfig::default().with_seed(42);
    let mut session = Session::from_config(&config)?;
    println!("{}", session.grid());
    let (start, goal) = (session.grid().start(), session.grid().goal());
    for strategy in Strategy::ALL {
        let mut discovered = 0;
        let report = session.run(strategy, start, goal, |_| discovered += 1)?;
        println!("{report}\nDiscovered: {discovered}\n");
    }
    println!("Exploration share:");
    for (strategy, share) in session.exploration_share() {
        println!("{strategy:>10}: {share:.1}%");
    }
    Ok(())
}
