//! The individual graph functions.  All of them map normalized grid coordinates `u`, `v` in
//! [-1, 1) plus time `t` (seconds) to a position.  The flat ones keep `x = u` and `z = v` and only
//! animate `y`; the rest wrap the grid onto a closed surface.

use std::f32::consts::PI;

use crate::Vec3;

pub fn sine(u: f32, v: f32, t: f32) -> Vec3 {
  Vec3::new(u, (PI * (u + t)).sin(), v)
}

pub fn sine_2d(u: f32, v: f32, t: f32) -> Vec3 {
  let mut y = (PI * (u + t)).sin();
  y += (PI * (v + t)).sin();
  y *= 0.5;
  Vec3::new(u, y, v)
}

pub fn multi_sine(u: f32, v: f32, t: f32) -> Vec3 {
  let mut y = (PI * (u + t)).sin();
  // half amplitude, double frequency, double speed
  y += (2. * PI * (u + 2. * t)).sin() * 0.5;
  y *= 2. / 3.;
  Vec3::new(u, y, v)
}

pub fn multi_sine_2d(u: f32, v: f32, t: f32) -> Vec3 {
  let mut y = 4. * (PI * (u + v + t * 0.5)).sin();
  y += (PI * (u + t)).sin();
  y += (2. * PI * (v + 2. * t)).sin() * 0.5;
  y *= 1. / 5.5;
  Vec3::new(u, y, v)
}

/// Radial wave that decays with distance from the origin.  The denominator is always >= 1.
pub fn ripple(u: f32, v: f32, t: f32) -> Vec3 {
  let d = (u * u + v * v).sqrt();
  let mut y = (PI * (4. * d - t)).sin();
  y /= 1. + 10. * d;
  Vec3::new(u, y, v)
}

/// `u` is the angle around the cylinder and `v` is the height.
pub fn cylinder(u: f32, v: f32, t: f32) -> Vec3 {
  let r = 0.8 + (PI * (6. * u + 2. * v + t)).sin() * 0.2;
  Vec3::new(r * (PI * u).sin(), v, r * (PI * u).cos())
}

fn wobbling_sphere_radius(u: f32, v: f32, t: f32) -> f32 {
  let mut r = 0.8 + (PI * (6. * u + t)).sin() * 0.1;
  r += (PI * (4. * v + t)).sin() * 0.1;
  r
}

pub fn sphere(u: f32, v: f32, t: f32) -> Vec3 {
  let r = wobbling_sphere_radius(u, v, t);
  let s = r * (PI * 0.5 * v).cos();
  Vec3::new(
    s * (PI * u).sin(),
    r * (PI * 0.5 * v).sin(),
    s * (PI * u).cos(),
  )
}

pub fn torus(u: f32, v: f32, t: f32) -> Vec3 {
  let r1 = 0.65 + (PI * (6. * u + t)).sin() * 0.1;
  let r2 = 0.2 + (PI * (4. * v + t)).sin() * 0.05;
  let s = r2 * (PI * v).cos() + r1;
  Vec3::new(s * (PI * u).sin(), r2 * (PI * v).sin(), s * (PI * u).cos())
}

/// Series indices for the swan functions.  Only the first term of the series is ever used.
const SWAN_M: i32 = 1;
const SWAN_N: i32 = 1;

/// Height of the single (m=1, n=1) mode of the truncated swan series, before scaling by the
/// normalization constant.
fn swan_mode(u: f32, v: f32, t: f32) -> f32 {
  let m = SWAN_M as f32;
  let n = SWAN_N as f32;

  let mut a = 1. + (-1f32).powi(SWAN_M + 1);
  a *= 1. + (-1f32).powi(SWAN_N + 1);
  a /= m * m * m * n * n * n;
  a *= (m * PI * u * 0.5).sin();

  // floored so that large negative `t` can't produce NaN
  let root_arg = (9. * m * m + 4. * n * n * t).max(0.);
  let mut b = ((n * PI * v) / 3.).sin();
  b *= (PI * root_arg.sqrt()).cos();

  a * b
}

/// Flat sheet carrying a single time-modulated ripple mode.  `c` is the series normalization
/// constant, `576 / pi^6`.
pub fn swan(u: f32, v: f32, t: f32, c: f32) -> Vec3 {
  Vec3::new(u, swan_mode(u, v, t) * c, v)
}

/// Same ripple as [`swan`], but riding on the wobbling sphere from [`sphere`] instead of a plane.
pub fn circular_swan(u: f32, v: f32, t: f32, c: f32) -> Vec3 {
  let r = wobbling_sphere_radius(u, v, t);
  let s = r * (PI * 0.5 * v).cos();
  Vec3::new(s * (PI * u).sin(), swan_mode(u, v, t) * c, s * (PI * u).cos())
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::constants::swan_normalization;

  fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-5
  }

  #[test]
  fn flat_functions_keep_u_and_v() {
    for f in [sine, sine_2d, multi_sine, multi_sine_2d, ripple] {
      let p = f(0.3, -0.7, 1.25);
      assert_eq!(p.x, 0.3);
      assert_eq!(p.z, -0.7);
    }
    let p = swan(0.3, -0.7, 1.25, swan_normalization());
    assert_eq!(p.x, 0.3);
    assert_eq!(p.z, -0.7);
  }

  #[test]
  fn wave_amplitudes_bounded() {
    let steps = 40;
    for ui in 0..steps {
      for vi in 0..steps {
        let u = ui as f32 / steps as f32 * 2. - 1.;
        let v = vi as f32 / steps as f32 * 2. - 1.;
        for t in [0., 0.33, 1.7, 12.5] {
          for f in [sine, sine_2d, multi_sine, multi_sine_2d, ripple] {
            let y = f(u, v, t).y;
            assert!(y.abs() <= 1. + 1e-5, "y={y} at u={u} v={v} t={t}");
          }
        }
      }
    }
  }

  #[test]
  fn sine_at_known_points() {
    assert!(approx_eq(sine(-0.5, 0., 0.).y, -1.));
    assert!(approx_eq(sine(0.5, 0., 0.).y, 1.));
    // one full period later
    assert!(approx_eq(sine(0.5, 0., 2.).y, 1.));
  }

  #[test]
  fn ripple_at_origin() {
    // d = 0 -> sin(-pi t) / 1
    assert!(approx_eq(ripple(0., 0., 0.5).y, -1.));
    assert!(approx_eq(ripple(0., 0., 0.).y, 0.));
  }

  #[test]
  fn cylinder_radius_within_bounds() {
    for (u, v, t) in [(0.1, 0.2, 0.), (-0.9, 0.8, 3.3), (0.5, -0.5, 10.)] {
      let p = cylinder(u, v, t);
      let r = (p.x * p.x + p.z * p.z).sqrt();
      assert!(r >= 0.6 - 1e-5 && r <= 1. + 1e-5);
      assert_eq!(p.y, v);
    }
  }

  #[test]
  fn sphere_radius_within_bounds() {
    for (u, v, t) in [(0.1, 0.2, 0.), (-0.9, 0.8, 3.3), (0.5, -0.5, 10.)] {
      let r = sphere(u, v, t).magnitude();
      assert!(r >= 0.6 - 1e-5 && r <= 1. + 1e-5);
    }
  }

  #[test]
  fn torus_tube_within_bounds() {
    let p = torus(0., 0., 0.);
    // r1 = 0.65, r2 = 0.2 at the origin with t = 0
    assert!(approx_eq(p.x, 0.));
    assert!(approx_eq(p.y, 0.));
    assert!(approx_eq(p.z, 0.85));
  }

  #[test]
  fn swan_single_mode() {
    let c = swan_normalization();
    // (1 + 1) * (1 + 1) * sin(pi / 4) * sin(pi / 6) * cos(3 pi) * c
    let expected = 4. * (PI / 4.).sin() * (PI / 6.).sin() * (3. * PI).cos() * c;
    assert!(approx_eq(swan(0.5, 0.5, 0., c).y, expected));
    assert!(approx_eq(circular_swan(0.5, 0.5, 0., c).y, expected));
  }

  #[test]
  fn swan_never_nan_for_negative_time() {
    let c = swan_normalization();
    assert!(swan(0.5, 0.5, -100., c).y.is_finite());
    assert!(circular_swan(0.5, 0.5, -100., c).y.is_finite());
  }

  #[test]
  fn circular_swan_wraps_like_sphere() {
    let c = swan_normalization();
    let (u, v, t) = (0.25, -0.4, 2.);
    let swan_pt = circular_swan(u, v, t, c);
    let sphere_pt = sphere(u, v, t);
    assert_eq!(swan_pt.x, sphere_pt.x);
    assert_eq!(swan_pt.z, sphere_pt.z);
  }
}
