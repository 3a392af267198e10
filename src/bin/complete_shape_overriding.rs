use behavioral_patterns::{total_area, Circle, Shape, ShapeKind, Square};
use colored::Colorize;
use tracing::warn;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    println!("=== Overridden area() ===");
    let circle = Circle::new(5.0);
    let square = Square::new(4.0);
    println!("{}", circle.area());
    println!("{}", square.area());

    println!("\n=== Dynamic dispatch over dyn Shape ===");
    let shapes: Vec<Box<dyn Shape>> = vec![Box::new(circle), Box::new(square)];
    for shape in &shapes {
        println!("{:<7} {}", shape.name().bold(), shape.area());
    }
    println!("total: {}", total_area(&shapes).to_string().green());

    println!("\n=== Closed variant set ===");
    let kinds: Vec<ShapeKind> = vec![circle.into(), square.into()];
    for kind in &kinds {
        println!("{kind}: {}", kind.area());
    }

    match Circle::try_new(-2.0) {
        Ok(circle) => println!("unexpected circle {:?}", circle),
        Err(err) => {
            warn!(%err, "rejected shape");
            println!("{} {err}", "rejected:".yellow());
        }
    }
}
