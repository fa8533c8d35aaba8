// ============================================================================
// Basic Usage Example
// ============================================================================

use calculator::prelude::*;

fn main() -> Result<(), CalcError> {
    calculator::logging::init(tracing::Level::INFO);

    let mut calc = Calculator::new();

    println!("Calculator Demo");
    println!("{}", "-".repeat(40));
    println!("5 + 3 = {}", calc.add(5, 3));
    println!("10 - 4 = {}", calc.subtract(10, 4));
    println!("6 * 7 = {}", calc.multiply(6, 7));
    println!("20 / 4 = {}", calc.divide(20, 4)?);
    println!("2 ^ 8 = {}", calc.power(2, 8));

    println!("\nHistory:");
    for calculation in calc.get_history() {
        println!("  {}", calculation);
    }

    println!(
        "\nAverage of [1,2,3,4,5]: {:?}",
        calculate_average([1, 2, 3, 4, 5])?
    );
    println!("Is 17 prime? {}", is_prime(17));

    Ok(())
}
