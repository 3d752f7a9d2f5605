/// Density factor at iteration `t` of `t_max`: `alpha(t) = c * exp(-t / t_max)`
///
/// Starts at `c`, decreases strictly with `t` and reaches `c / e` at `t_max`.
/// A zero-iteration run keeps `c`.
pub fn density_factor(c: f64, t: usize, t_max: usize) -> f64 {
    if t_max == 0 {
        return c;
    }
    c * (-(t as f64) / t_max as f64).exp()
}
