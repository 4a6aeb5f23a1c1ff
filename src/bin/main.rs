use percolate::PercolationStats;

fn main() {
    let mut args = std::env::args().skip(1);

    let size = args
        .next()
        .expect("usage: percolate <size> <trials>")
        .parse()
        .expect("size must be a positive integer");
    let trials = args
        .next()
        .expect("usage: percolate <size> <trials>")
        .parse()
        .expect("trials must be a positive integer");

    let stats = PercolationStats::run(size, trials);

    println!("mean                    = {}", stats.mean());
    println!("stddev                  = {}", stats.stddev());
    println!(
        "95% confidence interval = [{}, {}]",
        stats.confidence_lo(),
        stats.confidence_hi(),
    );
}
