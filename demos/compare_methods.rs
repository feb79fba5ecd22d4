use bezier_sketch::{
    eval_axis, eval_power_basis, sample_matrix, sample_parametric, sample_table, table,
};

fn main() {
    // control points of a cubic, the matrix formulation is defined for four points
    let xs = [0f64, 40.0, 80.0, 120.0];
    let ys = [0f64, 60.0, -60.0, 0.0];

    let parametric = sample_parametric(&xs, &ys);
    let matrix = sample_matrix(&xs, &ys);
    println!("parametric: {} samples, last {:?}", parametric.len(), parametric.last());
    println!("matrix:     {} samples, last {:?}", matrix.len(), matrix.last());

    let t = 0.35;
    println!(
        "x({}) bernstein = {:.6}, power basis = {:.6}",
        t,
        eval_axis(t, &xs),
        eval_power_basis(t, &xs)
    );

    println!("{}", table::format_table(&sample_table(&xs, &ys, 0.2, 1.0)));
}
