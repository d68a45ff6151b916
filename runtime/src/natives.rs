//! Name-based access to the runtime for interpreter hosts.
//!
//! The OKM interpreter reaches `std.io` and `std.math` through mangled
//! names of the form `@M<n>_<selector>`, e.g. `@M0_print:i:`. This module
//! maps those selectors onto the same functions compiled programs link
//! against, so interpreted and compiled code behave identically.

use std::fmt;
use std::io::Write;

use crate::error::{Result, RuntimeError};
use crate::format::{format_bool, format_double, format_long};
use crate::io::Output;
use crate::math;
use crate::random::{LazyRandom, SeedSource};

/// A value passed to or returned from a native function.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl Value {
    fn kind(&self) -> &'static str {
        match self {
            Value::Int(_) => "Int",
            Value::Float(_) => "Float",
            Value::Bool(_) => "Bool",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => f.write_str(&format_long(*n)),
            Value::Float(n) => f.write_str(&format_double(*n)),
            Value::Bool(b) => f.write_str(&format_bool(*b)),
        }
    }
}

/// Every function the runtime exports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Native {
    PrintLong,
    PrintlnLong,
    PrintDouble,
    PrintlnDouble,
    PrintBool,
    PrintlnBool,
    Power,
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Atan2,
    Sinh,
    Cosh,
    Tanh,
    Asinh,
    Acosh,
    Atanh,
    Random,
}

impl Native {
    pub const ALL: [Native; 21] = [
        Native::PrintLong,
        Native::PrintlnLong,
        Native::PrintDouble,
        Native::PrintlnDouble,
        Native::PrintBool,
        Native::PrintlnBool,
        Native::Power,
        Native::Sin,
        Native::Cos,
        Native::Tan,
        Native::Asin,
        Native::Acos,
        Native::Atan,
        Native::Atan2,
        Native::Sinh,
        Native::Cosh,
        Native::Tanh,
        Native::Asinh,
        Native::Acosh,
        Native::Atanh,
        Native::Random,
    ];

    /// The OKM selector, as it appears after the module prefix.
    pub fn selector(self) -> &'static str {
        match self {
            Native::PrintLong => "print:i:",
            Native::PrintlnLong => "println:i:",
            Native::PrintDouble => "print:d:",
            Native::PrintlnDouble => "println:d:",
            Native::PrintBool => "print:b:",
            Native::PrintlnBool => "println:b:",
            Native::Power => "power:base:exp:",
            Native::Sin => "sin:rad:",
            Native::Cos => "cos:rad:",
            Native::Tan => "tan:rad:",
            Native::Asin => "asin:x:",
            Native::Acos => "acos:x:",
            Native::Atan => "atan:x:",
            Native::Atan2 => "atan2:y:x:",
            Native::Sinh => "sinh:x:",
            Native::Cosh => "cosh:x:",
            Native::Tanh => "tanh:x:",
            Native::Asinh => "asinh:x:",
            Native::Acosh => "acosh:x:",
            Native::Atanh => "atanh:x:",
            Native::Random => "random:",
        }
    }

    /// The C symbol a compiled program calls.
    pub fn symbol(self) -> &'static str {
        match self {
            Native::PrintLong => "print_long",
            Native::PrintlnLong => "println_long",
            Native::PrintDouble => "print_double",
            Native::PrintlnDouble => "println_double",
            Native::PrintBool => "print_bool",
            Native::PrintlnBool => "println_bool",
            Native::Power => "math_power",
            Native::Sin => "math_sin",
            Native::Cos => "math_cos",
            Native::Tan => "math_tan",
            Native::Asin => "math_asin",
            Native::Acos => "math_acos",
            Native::Atan => "math_atan",
            Native::Atan2 => "math_atan2",
            Native::Sinh => "math_sinh",
            Native::Cosh => "math_cosh",
            Native::Tanh => "math_tanh",
            Native::Asinh => "math_asinh",
            Native::Acosh => "math_acosh",
            Native::Atanh => "math_atanh",
            Native::Random => "math_random",
        }
    }

    pub fn arity(self) -> usize {
        match self {
            Native::Random => 0,
            Native::Power | Native::Atan2 => 2,
            _ => 1,
        }
    }

    /// Look up a native by plain selector (`print:i:`) or mangled name
    /// (`@M3_print:i:`).
    pub fn from_selector(name: &str) -> Option<Native> {
        let selector = strip_module_prefix(name);
        Native::ALL.into_iter().find(|n| n.selector() == selector)
    }

    pub fn resolve(name: &str) -> Result<Native> {
        Native::from_selector(name).ok_or_else(|| RuntimeError::UnknownNative(name.to_string()))
    }

    /// Run this native.
    ///
    /// Prints go to `out` and return `None`; everything else returns its
    /// result. Integer arguments are widened where a float is expected.
    pub fn call<W, S>(
        self,
        out: &mut Output<W>,
        random: &mut LazyRandom<S>,
        args: &[Value],
    ) -> Result<Option<Value>>
    where
        W: Write,
        S: SeedSource,
    {
        if args.len() != self.arity() {
            return Err(RuntimeError::Arity {
                native: self.selector(),
                expected: self.arity(),
                found: args.len(),
            });
        }

        let unary = |f: extern "C" fn(f32) -> f32| -> Result<Option<Value>> {
            let x = self.float_arg(args, 0)?;
            Ok(Some(Value::Float(f(x) as f64)))
        };

        match self {
            Native::PrintLong => out.print_long(self.int_arg(args, 0)?).map(|_| None),
            Native::PrintlnLong => out.println_long(self.int_arg(args, 0)?).map(|_| None),
            Native::PrintDouble => out.print_double(self.double_arg(args, 0)?).map(|_| None),
            Native::PrintlnDouble => out.println_double(self.double_arg(args, 0)?).map(|_| None),
            Native::PrintBool => out.print_bool(self.bool_arg(args, 0)?).map(|_| None),
            Native::PrintlnBool => out.println_bool(self.bool_arg(args, 0)?).map(|_| None),
            Native::Power => {
                let base = self.float_arg(args, 0)?;
                let exp = self.float_arg(args, 1)?;
                Ok(Some(Value::Float(math::math_power(base, exp) as f64)))
            }
            Native::Atan2 => {
                let y = self.float_arg(args, 0)?;
                let x = self.float_arg(args, 1)?;
                Ok(Some(Value::Float(math::math_atan2(y, x) as f64)))
            }
            Native::Sin => unary(math::math_sin),
            Native::Cos => unary(math::math_cos),
            Native::Tan => unary(math::math_tan),
            Native::Asin => unary(math::math_asin),
            Native::Acos => unary(math::math_acos),
            Native::Atan => unary(math::math_atan),
            Native::Sinh => unary(math::math_sinh),
            Native::Cosh => unary(math::math_cosh),
            Native::Tanh => unary(math::math_tanh),
            Native::Asinh => unary(math::math_asinh),
            Native::Acosh => unary(math::math_acosh),
            Native::Atanh => unary(math::math_atanh),
            Native::Random => Ok(Some(Value::Int(random.draw() as i64))),
        }
    }

    fn int_arg(self, args: &[Value], index: usize) -> Result<i64> {
        match args[index] {
            Value::Int(n) => Ok(n),
            other => Err(self.mismatch(index, "Int", other)),
        }
    }

    fn bool_arg(self, args: &[Value], index: usize) -> Result<bool> {
        match args[index] {
            Value::Bool(b) => Ok(b),
            other => Err(self.mismatch(index, "Bool", other)),
        }
    }

    fn double_arg(self, args: &[Value], index: usize) -> Result<f64> {
        match args[index] {
            Value::Float(n) => Ok(n),
            Value::Int(n) => Ok(n as f64),
            other => Err(self.mismatch(index, "Float", other)),
        }
    }

    fn float_arg(self, args: &[Value], index: usize) -> Result<f32> {
        self.double_arg(args, index).map(|n| n as f32)
    }

    fn mismatch(self, index: usize, expected: &'static str, found: Value) -> RuntimeError {
        RuntimeError::ArgumentType {
            native: self.selector(),
            index,
            expected,
            found: found.kind(),
        }
    }
}

impl fmt::Display for Native {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.selector())
    }
}

/// Drop an `@M<digits>_` module prefix if present.
fn strip_module_prefix(name: &str) -> &str {
    let Some(rest) = name.strip_prefix("@M") else {
        return name;
    };
    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    match rest[digits..].strip_prefix('_') {
        Some(selector) if digits > 0 => selector,
        _ => name,
    }
}
