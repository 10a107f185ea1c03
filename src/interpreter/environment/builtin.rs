use std::{f64::consts, sync::Arc};

use crate::interpreter::environment::{Environment, Function};

/// Type alias for builtin function handlers.
///
/// A builtin receives a slice holding exactly as many arguments as its arity.
type BuiltinFn = fn(&[f64]) -> f64;

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry provides:
/// - a string name,
/// - the arity,
/// - a function pointer implementing the builtin.
///
/// The macro produces:
/// - `BuiltinDef` (internal metadata),
/// - `BUILTIN_TABLE` (static table for registration),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        struct BuiltinDef {
            name:  &'static str,
            arity: usize,
            func:  BuiltinFn,
        }
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, arity: $arity, func: $func },
            )*
        ];
        /// Names of every builtin function, in registration order.
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

/// Generates a one-argument builtin from an `f64` method.
macro_rules! unary_builtin {
    ($fname:ident, $method:ident) => {
        fn $fname(args: &[f64]) -> f64 {
            args[0].$method()
        }
    };
}

unary_builtin!(sin, sin);
unary_builtin!(cos, cos);
unary_builtin!(tan, tan);
unary_builtin!(asin, asin);
unary_builtin!(acos, acos);
unary_builtin!(atan, atan);
unary_builtin!(sinh, sinh);
unary_builtin!(cosh, cosh);
unary_builtin!(tanh, tanh);
unary_builtin!(exp, exp);
unary_builtin!(ln, ln);
unary_builtin!(log10, log10);
unary_builtin!(log2, log2);
unary_builtin!(sqrt, sqrt);
unary_builtin!(cbrt, cbrt);
unary_builtin!(abs, abs);
unary_builtin!(floor, floor);
unary_builtin!(ceil, ceil);
unary_builtin!(round, round);
unary_builtin!(trunc, trunc);
unary_builtin!(radians, to_radians);
unary_builtin!(degrees, to_degrees);

/// Returns `-1`, `0` or `1` according to the sign of the argument; NaN stays
/// NaN.
fn sign(args: &[f64]) -> f64 {
    let x = args[0];
    if x.is_nan() || x == 0.0 { x } else { x.signum() }
}

/// `log(base, x)`: logarithm of `x` in the given base.
fn log(args: &[f64]) -> f64 {
    args[1].log(args[0])
}

fn atan2(args: &[f64]) -> f64 {
    args[0].atan2(args[1])
}

fn pow(args: &[f64]) -> f64 {
    args[0].powf(args[1])
}

fn hypot(args: &[f64]) -> f64 {
    args[0].hypot(args[1])
}

fn min(args: &[f64]) -> f64 {
    args[0].min(args[1])
}

fn max(args: &[f64]) -> f64 {
    args[0].max(args[1])
}

/// `clamp(x, lo, hi)`. Bounds given in the wrong order are swapped instead of
/// panicking.
fn clamp(args: &[f64]) -> f64 {
    let (lo, hi) = if args[1] <= args[2] { (args[1], args[2]) } else { (args[2], args[1]) };
    args[0].max(lo).min(hi)
}

builtin_functions! {
    "sin"     => { arity: 1, func: sin },
    "cos"     => { arity: 1, func: cos },
    "tan"     => { arity: 1, func: tan },
    "asin"    => { arity: 1, func: asin },
    "acos"    => { arity: 1, func: acos },
    "atan"    => { arity: 1, func: atan },
    "sinh"    => { arity: 1, func: sinh },
    "cosh"    => { arity: 1, func: cosh },
    "tanh"    => { arity: 1, func: tanh },
    "exp"     => { arity: 1, func: exp },
    "ln"      => { arity: 1, func: ln },
    "log10"   => { arity: 1, func: log10 },
    "log2"    => { arity: 1, func: log2 },
    "sqrt"    => { arity: 1, func: sqrt },
    "cbrt"    => { arity: 1, func: cbrt },
    "abs"     => { arity: 1, func: abs },
    "floor"   => { arity: 1, func: floor },
    "ceil"    => { arity: 1, func: ceil },
    "round"   => { arity: 1, func: round },
    "trunc"   => { arity: 1, func: trunc },
    "sign"    => { arity: 1, func: sign },
    "radians" => { arity: 1, func: radians },
    "degrees" => { arity: 1, func: degrees },
    "log"     => { arity: 2, func: log },
    "atan2"   => { arity: 2, func: atan2 },
    "pow"     => { arity: 2, func: pow },
    "hypot"   => { arity: 2, func: hypot },
    "min"     => { arity: 2, func: min },
    "max"     => { arity: 2, func: max },
    "clamp"   => { arity: 3, func: clamp },
}

/// Names and values of the builtin constants.
pub const BUILTIN_CONSTANTS: &[(&str, f64)] = &[("pi", consts::PI),
                                                ("e", consts::E),
                                                ("tau", consts::TAU)];

/// Registers every builtin function and constant in `env`, replacing any
/// bindings with the same names.
///
/// # Example
/// ```
/// use doppio::{get_result, interpreter::environment::{Environment, builtin}};
///
/// let mut env = Environment::new();
/// builtin::install(&mut env);
///
/// assert_eq!(get_result("hypot(3, 4)", &env).unwrap(), 5.0);
/// assert_eq!(get_result("max(floor(pi), 2)", &env).unwrap(), 3.0);
/// ```
pub fn install(env: &mut Environment) {
    for def in BUILTIN_TABLE {
        // Every table arity is within range, so the descriptor is built directly.
        let func = def.func;
        env.functions.insert(def.name.to_string(),
                             Function { name:  def.name.to_string(),
                                        arity: def.arity,
                                        entry: Arc::new(func), });
    }
    for (name, value) in BUILTIN_CONSTANTS {
        env.set_variable(*name, *value);
    }
}
