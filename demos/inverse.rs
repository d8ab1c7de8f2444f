use anyhow::{Context, Result};
use log::LevelFilter;

use dense_matrix::{Matrix, Tolerance};

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or("DENSE_MATRIX_LOG", "dense_matrix=debug"))
        .init();

    let r = Matrix::from_rows(&[[8.0, 2.0, 4.0], [4.0, 6.0, 6.0], [4.0, 8.0, 8.0]])?;
    println!("R =\n{}\n", r);
    println!("det(R) = {}\n", r.determinant()?);
    println!("cofactors(R) =\n{}\n", r.calc_complements()?);

    let inverse = r.inverse().context("R should be invertible")?;
    println!("inverse(R) =\n{}\n", inverse);

    let product = (&r * &inverse)?;
    println!("R * inverse(R) =\n{}\n", product);
    println!(
        "equals identity within {} digits: {}",
        Tolerance::DEFAULT_DECIMAL_DIGITS,
        product.eq_matrix(&Matrix::identity(3)?)?
    );

    let singular = Matrix::from_rows(&[[1.0, 2.0], [2.0, 4.0]])?;
    match singular.inverse() {
        Ok(m) => println!("unexpected inverse:\n{}", m),
        Err(err) => println!("\n[[1, 2], [2, 4]]: {}", err),
    }

    Ok(())
}
