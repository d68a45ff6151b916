//! Math functions for the OKM runtime
//!
//! OKM's `std.math` works in single precision, so every function here
//! takes and returns `f32`. Out-of-domain inputs give NaN or infinity as
//! libm does; nothing here fails.

/// Power (base^exp)
#[no_mangle]
pub extern "C" fn math_power(base: f32, exp: f32) -> f32 {
    base.powf(exp)
}

/// Sine
#[no_mangle]
pub extern "C" fn math_sin(rad: f32) -> f32 {
    rad.sin()
}

/// Cosine
#[no_mangle]
pub extern "C" fn math_cos(rad: f32) -> f32 {
    rad.cos()
}

/// Tangent
#[no_mangle]
pub extern "C" fn math_tan(rad: f32) -> f32 {
    rad.tan()
}

/// Arc sine, NaN outside [-1, 1]
#[no_mangle]
pub extern "C" fn math_asin(x: f32) -> f32 {
    x.asin()
}

/// Arc cosine, NaN outside [-1, 1]
#[no_mangle]
pub extern "C" fn math_acos(x: f32) -> f32 {
    x.acos()
}

/// Arc tangent
#[no_mangle]
pub extern "C" fn math_atan(x: f32) -> f32 {
    x.atan()
}

/// Arc tangent of y/x (handles quadrants correctly)
#[no_mangle]
pub extern "C" fn math_atan2(y: f32, x: f32) -> f32 {
    y.atan2(x)
}

/// Hyperbolic sine
#[no_mangle]
pub extern "C" fn math_sinh(x: f32) -> f32 {
    x.sinh()
}

/// Hyperbolic cosine
#[no_mangle]
pub extern "C" fn math_cosh(x: f32) -> f32 {
    x.cosh()
}

/// Hyperbolic tangent
#[no_mangle]
pub extern "C" fn math_tanh(x: f32) -> f32 {
    x.tanh()
}

/// Inverse hyperbolic sine
#[no_mangle]
pub extern "C" fn math_asinh(x: f32) -> f32 {
    x.asinh()
}

/// Inverse hyperbolic cosine, NaN below 1
#[no_mangle]
pub extern "C" fn math_acosh(x: f32) -> f32 {
    x.acosh()
}

/// Inverse hyperbolic tangent, infinite at +-1 and NaN beyond
#[no_mangle]
pub extern "C" fn math_atanh(x: f32) -> f32 {
    x.atanh()
}
