use kaczmarz::{RkOptions, RkRkSolver, RowMajorMatrix};

fn main() {
    let n = 3;
    // U = V = I, so both x and b should reach y
    let eye = RowMajorMatrix::from_fn(n, n, |i, j| if i == j { 1.0 } else { 0.0 });
    let y = vec![1.0, 2.0, 3.0];

    let solver = RkRkSolver::new(RkOptions::new(5000, true));
    let res = solver.solve(&eye, &eye, &y, &y).unwrap();
    println!("x = {:?}", res.x);
    println!("b = {:?}", res.b);

    // (iteration, error) pairs as a plotter would receive them
    if let Some(errors) = res.errors {
        for (i, e) in errors.points().step_by(500) {
            println!("{i}\t{e:.3e}");
        }
    }
}
