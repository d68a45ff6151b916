//! Integration tests for the OKM runtime.
//!
//! Drives the library the way its two kinds of callers do: an interpreter
//! host going through the natives table, and compiled code calling the
//! exported C functions directly.

use okm_runtime::{
    math_acos, math_acosh, math_asin, math_asinh, math_atan, math_atan2, math_atanh, math_cos,
    math_cosh, math_power, math_random, math_sin, math_sinh, math_tan, math_tanh, FixedSeed,
    LazyRandom, Native, Output, RuntimeError, SeedSource, Value, RANDOM_MAX,
};

/// Run a sequence of mangled calls and collect what they print and return.
fn interpret(calls: &[(&str, Vec<Value>)]) -> (String, Vec<Option<Value>>) {
    let mut out = Output::new(Vec::new());
    let mut random = LazyRandom::new(FixedSeed(2024));
    let mut results = Vec::new();
    for (name, args) in calls {
        let native = Native::resolve(name).expect("native exists");
        results.push(native.call(&mut out, &mut random, args).expect("call succeeds"));
    }
    let text = String::from_utf8(out.into_inner()).expect("output is ASCII");
    (text, results)
}

#[test]
fn test_interpreted_program_output() {
    let (text, _) = interpret(&[
        ("@M0_print:i:", vec![Value::Int(1)]),
        ("@M0_print:b:", vec![Value::Bool(false)]),
        ("@M0_println:i:", vec![Value::Int(-42)]),
        ("@M0_println:d:", vec![Value::Float(0.125)]),
        ("@M0_println:b:", vec![Value::Bool(true)]),
    ]);
    assert_eq!(text, "1false-42\n0.125\ntrue\n");
}

#[test]
fn test_interpreted_math_matches_compiled() {
    let (_, results) = interpret(&[
        ("@M1_power:base:exp:", vec![Value::Float(3.0), Value::Float(4.0)]),
        ("@M1_atan2:y:x:", vec![Value::Float(1.0), Value::Float(1.0)]),
    ]);
    assert_eq!(results[0], Some(Value::Float(math_power(3.0, 4.0) as f64)));
    assert_eq!(results[1], Some(Value::Float(math_atan2(1.0, 1.0) as f64)));
}

/// Selector, C symbol and the export each name must reach.
const EXPORTS: [(&str, &str, Native); 21] = [
    ("print:i:", "print_long", Native::PrintLong),
    ("println:i:", "println_long", Native::PrintlnLong),
    ("print:d:", "print_double", Native::PrintDouble),
    ("println:d:", "println_double", Native::PrintlnDouble),
    ("print:b:", "print_bool", Native::PrintBool),
    ("println:b:", "println_bool", Native::PrintlnBool),
    ("power:base:exp:", "math_power", Native::Power),
    ("sin:rad:", "math_sin", Native::Sin),
    ("cos:rad:", "math_cos", Native::Cos),
    ("tan:rad:", "math_tan", Native::Tan),
    ("asin:x:", "math_asin", Native::Asin),
    ("acos:x:", "math_acos", Native::Acos),
    ("atan:x:", "math_atan", Native::Atan),
    ("atan2:y:x:", "math_atan2", Native::Atan2),
    ("sinh:x:", "math_sinh", Native::Sinh),
    ("cosh:x:", "math_cosh", Native::Cosh),
    ("tanh:x:", "math_tanh", Native::Tanh),
    ("asinh:x:", "math_asinh", Native::Asinh),
    ("acosh:x:", "math_acosh", Native::Acosh),
    ("atanh:x:", "math_atanh", Native::Atanh),
    ("random:", "math_random", Native::Random),
];

#[test]
fn test_selector_symbol_pairs() {
    assert_eq!(Native::ALL.len(), EXPORTS.len());
    for (selector, symbol, native) in EXPORTS {
        let mangled = format!("@M7_{}", selector);
        assert_eq!(Native::resolve(&mangled).unwrap(), native);
        assert_eq!(native.selector(), selector);
        assert_eq!(native.symbol(), symbol, "symbol for {}", selector);
    }
}

#[test]
fn test_unary_natives_call_their_export() {
    let exports: [(Native, extern "C" fn(f32) -> f32); 12] = [
        (Native::Sin, math_sin),
        (Native::Cos, math_cos),
        (Native::Tan, math_tan),
        (Native::Asin, math_asin),
        (Native::Acos, math_acos),
        (Native::Atan, math_atan),
        (Native::Sinh, math_sinh),
        (Native::Cosh, math_cosh),
        (Native::Tanh, math_tanh),
        (Native::Asinh, math_asinh),
        (Native::Acosh, math_acosh),
        (Native::Atanh, math_atanh),
    ];
    let mut out = Output::new(Vec::new());
    let mut random = LazyRandom::new(FixedSeed(0));
    for (native, export) in exports {
        // acosh is only defined from 1 upwards.
        let x = if native == Native::Acosh { 1.75_f32 } else { 0.75_f32 };
        let result = native
            .call(&mut out, &mut random, &[Value::Float(x as f64)])
            .unwrap();
        assert_eq!(result, Some(Value::Float(export(x) as f64)), "{}", native);
    }
}

#[test]
fn test_unknown_native_reports_name() {
    let err = Native::resolve("@M1_floor:x:").unwrap_err();
    assert_eq!(err.to_string(), "unknown native function `@M1_floor:x:`");
}

#[test]
fn test_argument_error_message() {
    let mut out = Output::new(Vec::new());
    let mut random = LazyRandom::new(FixedSeed(0));
    let err = Native::PrintlnBool
        .call(&mut out, &mut random, &[Value::Int(1)])
        .unwrap_err();
    assert!(matches!(err, RuntimeError::ArgumentType { .. }));
    assert_eq!(
        err.to_string(),
        "println:b:: argument 0 should be Bool, found Int"
    );
}

struct Reseeding {
    seeds: u32,
}

impl SeedSource for Reseeding {
    fn seed(&mut self) -> u64 {
        self.seeds += 1;
        u64::from(self.seeds) * 1_000_003
    }
}

#[test]
fn test_random_seeds_once_across_calls() {
    let mut out = Output::new(Vec::new());
    let mut random = LazyRandom::new(Reseeding { seeds: 0 });
    let mut reference = LazyRandom::new(FixedSeed(1_000_003));

    for _ in 0..5 {
        let drawn = Native::Random.call(&mut out, &mut random, &[]).unwrap();
        assert_eq!(drawn, Some(Value::Int(reference.draw() as i64)));
    }
    assert_eq!(random.seed_events(), 1);
}

#[test]
fn test_global_random_in_range() {
    let first = math_random();
    let second = math_random();
    assert!((0..=RANDOM_MAX).contains(&first));
    assert!((0..=RANDOM_MAX).contains(&second));
}
