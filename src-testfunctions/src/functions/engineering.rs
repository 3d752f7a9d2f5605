//! Constrained engineering design problems
//!
//! Each problem exposes its raw objective and its inequality constraints
//! `g_i(x) <= 0`. Penalties are applied by [`crate::ProblemSpec`], not here.

use ndarray::Array1;
use std::f64::consts::PI;

/// Tension/compression spring weight
/// x = (d wire diameter, D mean coil diameter, N active coils)
/// Bounds: d in [0.05, 2], D in [0.25, 1.3], N in [2, 15]
/// Best known: f = 0.012665 at (0.051689, 0.356718, 11.288966)
pub fn spring_design_objective(x: &Array1<f64>) -> f64 {
    let (d, dm, n) = (x[0], x[1], x[2]);
    (n + 2.0) * dm * d.powi(2)
}

/// Spring constraints: shear stress, surge frequency, deflection, outer diameter
pub fn spring_design_constraints(x: &Array1<f64>) -> Array1<f64> {
    let (d, dm, n) = (x[0], x[1], x[2]);
    let g1 = 1.0 - (dm.powi(3) * n) / (71785.0 * d.powi(4));
    let g2 = (4.0 * dm.powi(2) - d * dm) / (12566.0 * (dm * d.powi(3) - d.powi(4)))
        + 1.0 / (5108.0 * d.powi(2))
        - 1.0;
    let g3 = 1.0 - (140.45 * d) / (dm.powi(2) * n);
    let g4 = (dm + d) / 1.5 - 1.0;
    Array1::from(vec![g1, g2, g3, g4])
}

/// Shell and head plates come in 1/16 inch increments
fn round_to_plate(t: f64) -> f64 {
    0.0625 * (t / 0.0625).round()
}

/// Cylindrical pressure vessel fabrication cost
/// x = (Ts shell thickness, Th head thickness, R inner radius, L cylinder length)
/// Bounds: Ts, Th in [0.0625, 6.1875], R, L in [10, 200]
/// Best known: f = 6059.714 at (0.8125, 0.4375, 42.098446, 176.636596)
pub fn pressure_vessel_objective(x: &Array1<f64>) -> f64 {
    let ts = round_to_plate(x[0]);
    let th = round_to_plate(x[1]);
    let (r, l) = (x[2], x[3]);
    0.6224 * ts * r * l + 1.7781 * th * r.powi(2) + 3.1661 * ts.powi(2) * l + 19.84 * ts.powi(2) * r
}

/// Pressure vessel constraints: shell thickness, head thickness, volume, length
pub fn pressure_vessel_constraints(x: &Array1<f64>) -> Array1<f64> {
    let ts = round_to_plate(x[0]);
    let th = round_to_plate(x[1]);
    let (r, l) = (x[2], x[3]);
    let g1 = -ts + 0.0193 * r;
    let g2 = -th + 0.00954 * r;
    let g3 = -PI * r.powi(2) * l - (4.0 / 3.0) * PI * r.powi(3) + 1_296_000.0;
    let g4 = l - 240.0;
    Array1::from(vec![g1, g2, g3, g4])
}

const BEAM_LOAD: f64 = 6000.0;
const BEAM_LENGTH: f64 = 14.0;
const BEAM_E: f64 = 30e6;
const BEAM_G: f64 = 12e6;
const BEAM_TAU_MAX: f64 = 13600.0;
const BEAM_SIGMA_MAX: f64 = 30000.0;
const BEAM_DELTA_MAX: f64 = 0.25;

/// Welded beam fabrication cost
/// x = (h weld thickness, l weld length, t beam thickness, b beam width)
/// Bounds: h in [0.1, 2], l in [0.1, 10], t in [0.1, 10], b in [0.1, 2]
/// Best known: f = 1.724852 at (0.205730, 3.470489, 9.036624, 0.205730)
pub fn welded_beam_objective(x: &Array1<f64>) -> f64 {
    let (h, l, t, b) = (x[0], x[1], x[2], x[3]);
    1.10471 * h.powi(2) * l + 0.04811 * t * b * (BEAM_LENGTH + l)
}

/// Welded beam constraints: shear stress, bending stress, geometry, minimum weld,
/// end deflection, buckling load
pub fn welded_beam_constraints(x: &Array1<f64>) -> Array1<f64> {
    let (h, l, t, b) = (x[0], x[1], x[2], x[3]);
    let p = BEAM_LOAD;
    let big_l = BEAM_LENGTH;

    let tau_prime = p / (2.0_f64.sqrt() * h * l);
    let moment = p * (big_l + l / 2.0);
    let radius = (l.powi(2) / 4.0 + ((h + t) / 2.0).powi(2)).sqrt();
    let polar = 2.0 * (2.0_f64.sqrt() * h * l * (l.powi(2) / 12.0 + ((h + t) / 2.0).powi(2)));
    let tau_double_prime = moment * radius / polar;
    let tau = (tau_prime.powi(2)
        + 2.0 * tau_prime * tau_double_prime * l / (2.0 * radius)
        + tau_double_prime.powi(2))
    .sqrt();

    let sigma = 6.0 * p * big_l / (b * t.powi(2));
    let delta = 4.0 * p * big_l.powi(3) / (BEAM_E * t.powi(3) * b);
    let p_c = (4.013 * BEAM_E * (t.powi(2) * b.powi(6) / 36.0).sqrt() / big_l.powi(2))
        * (1.0 - t / (2.0 * big_l) * (BEAM_E / (4.0 * BEAM_G)).sqrt());

    Array1::from(vec![
        tau - BEAM_TAU_MAX,
        sigma - BEAM_SIGMA_MAX,
        h - b,
        0.125 - h,
        delta - BEAM_DELTA_MAX,
        p - p_c,
    ])
}

/// Speed reducer weight
/// x = (b face width, m module, z pinion teeth, l1, l2 shaft lengths, d1, d2 shaft diameters)
/// Bounds: b in [2.6, 3.6], m in [0.7, 0.8], z in [17, 28], l1, l2 in [7.3, 8.3],
/// d1 in [2.9, 3.9], d2 in [5.0, 5.5]
/// Best known: f = 2994.47 at (3.5, 0.7, 17, 7.3, 7.715320, 3.350215, 5.286654)
pub fn speed_reducer_objective(x: &Array1<f64>) -> f64 {
    let (b, m, z, l1, l2, d1, d2) = (x[0], x[1], x[2], x[3], x[4], x[5], x[6]);
    0.7854 * b * m.powi(2) * (3.3333 * z.powi(2) + 14.9334 * z - 43.0934)
        - 1.508 * b * (d1.powi(2) + d2.powi(2))
        + 7.4777 * (d1.powi(3) + d2.powi(3))
        + 0.7854 * (l1 * d1.powi(2) + l2 * d2.powi(2))
}

/// Speed reducer constraints: gear bending and surface stress, shaft deflections
/// and stresses, geometry ratios
pub fn speed_reducer_constraints(x: &Array1<f64>) -> Array1<f64> {
    let (b, m, z, l1, l2, d1, d2) = (x[0], x[1], x[2], x[3], x[4], x[5], x[6]);
    Array1::from(vec![
        27.0 / (b * m.powi(2) * z) - 1.0,
        397.5 / (b * m.powi(2) * z.powi(2)) - 1.0,
        1.93 * l1.powi(3) / (m * z * d1.powi(4)) - 1.0,
        1.93 * l2.powi(3) / (m * z * d2.powi(4)) - 1.0,
        ((745.0 * l1 / (m * z)).powi(2) + 16.9e6).sqrt() / (110.0 * d1.powi(3)) - 1.0,
        ((745.0 * l2 / (m * z)).powi(2) + 157.5e6).sqrt() / (85.0 * d2.powi(3)) - 1.0,
        m * z / 40.0 - 1.0,
        5.0 * m / b - 1.0,
        b / (12.0 * m) - 1.0,
        (1.5 * d1 + 1.9) / l1 - 1.0,
        (1.1 * d2 + 1.9) / l2 - 1.0,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_near_feasible(g: &Array1<f64>, tol: f64) {
        for (i, &gi) in g.iter().enumerate() {
            assert!(gi <= tol, "constraint g{} = {} violated", i + 1, gi);
        }
    }

    #[test]
    fn test_spring_best_known() {
        let x = Array1::from(vec![0.051689, 0.356718, 11.288966]);
        assert!((spring_design_objective(&x) - 0.012665).abs() < 1e-5);
        assert_near_feasible(&spring_design_constraints(&x), 1e-4);
    }

    #[test]
    fn test_pressure_vessel_best_known() {
        let x = Array1::from(vec![0.8125, 0.4375, 42.098446, 176.636596]);
        assert!((pressure_vessel_objective(&x) - 6059.714).abs() < 0.01);
        assert_near_feasible(&pressure_vessel_constraints(&x), 1e-3);
    }

    #[test]
    fn test_pressure_vessel_rounds_thickness() {
        let exact = Array1::from(vec![0.8125, 0.4375, 50.0, 100.0]);
        let nudged = Array1::from(vec![0.82, 0.43, 50.0, 100.0]);
        assert_eq!(pressure_vessel_objective(&exact), pressure_vessel_objective(&nudged));
    }

    #[test]
    fn test_welded_beam_best_known() {
        let x = Array1::from(vec![0.205730, 3.470489, 9.036624, 0.205730]);
        assert!((welded_beam_objective(&x) - 1.724852).abs() < 1e-4);
        assert_near_feasible(&welded_beam_constraints(&x), 1e-3);
    }

    #[test]
    fn test_speed_reducer_best_known() {
        let x = Array1::from(vec![3.5, 0.7, 17.0, 7.3, 7.715320, 3.350215, 5.286654]);
        assert!((speed_reducer_objective(&x) - 2994.47).abs() < 0.01);
        assert_near_feasible(&speed_reducer_constraints(&x), 1e-4);
    }

    #[test]
    fn test_constraint_counts() {
        assert_eq!(spring_design_constraints(&Array1::from(vec![0.1, 0.5, 5.0])).len(), 4);
        assert_eq!(pressure_vessel_constraints(&Array1::from(vec![1.0, 1.0, 50.0, 100.0])).len(), 4);
        assert_eq!(welded_beam_constraints(&Array1::from(vec![0.5, 5.0, 5.0, 0.5])).len(), 6);
        let reducer = Array1::from(vec![3.0, 0.75, 20.0, 7.5, 7.5, 3.0, 5.2]);
        assert_eq!(speed_reducer_constraints(&reducer).len(), 11);
    }
}
