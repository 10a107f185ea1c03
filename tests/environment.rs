use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use doppio::{
    error::{Error, RuntimeError},
    get_result,
    interpreter::environment::{Environment, MAX_ARITY, builtin::BUILTIN_FUNCTIONS},
};

#[test]
fn variables_can_be_set_and_replaced() {
    let mut env = Environment::new();
    assert_eq!(env.set_variable("x", 1.0), None);
    assert_eq!(env.set_variable("x", 2.0), Some(1.0));
    assert_eq!(env.variable("x"), Some(2.0));
    assert_eq!(get_result("x * 3", &env).unwrap(), 6.0);

    assert_eq!(env.remove_variable("x"), Some(2.0));
    assert_eq!(env.variable("x"), None);
    assert_eq!(get_result("x", &env),
               Err(Error::Runtime(RuntimeError::UnknownVariable { name: "x".to_string() })));
}

#[test]
fn names_are_case_sensitive() {
    let mut env = Environment::new();
    env.set_variable("X", 1.0);
    assert!(get_result("x", &env).is_err());
    assert_eq!(get_result("X", &env).unwrap(), 1.0);
}

#[test]
fn variables_and_functions_may_share_a_name() {
    let mut env = Environment::new();
    env.set_variable("f", 10.0);
    env.set_function("f", 1, |args| args[0] + 1.0).unwrap();
    assert_eq!(get_result("f(f)", &env).unwrap(), 11.0);
}

#[test]
fn arguments_arrive_in_call_order() {
    let mut env = Environment::new();
    env.set_function("f", 3, |args| args[0] * 100.0 + args[1] * 10.0 + args[2])
       .unwrap();
    assert_eq!(get_result("f(1, 2, 3)", &env).unwrap(), 123.0);
}

#[test]
fn every_supported_arity_can_be_called() {
    let mut env = Environment::new();
    for arity in 0..=MAX_ARITY {
        env.set_function(format!("f{arity}"), arity, |args| args.iter().sum())
           .unwrap();
    }
    assert_eq!(get_result("f0()", &env).unwrap(), 0.0);
    assert_eq!(get_result("f1(1)", &env).unwrap(), 1.0);
    assert_eq!(get_result("f9(1, 2, 3, 4, 5, 6, 7, 8, 9)", &env).unwrap(), 45.0);
}

#[test]
fn arity_above_the_maximum_is_rejected() {
    let mut env = Environment::new();
    assert_eq!(env.set_function("g", 10, |_| 0.0),
               Err(RuntimeError::InvalidArity { name:  "g".to_string(),
                                                arity: 10, }));
    assert!(env.function("g").is_none());
}

#[test]
fn argument_count_must_match_arity() {
    let mut env = Environment::new();
    env.set_function("f", 2, |args| args[0] - args[1]).unwrap();

    assert_eq!(get_result("f(1)", &env),
               Err(Error::Runtime(RuntimeError::ArgumentCountMismatch { name:     "f".to_string(),
                                                                        expected: 2,
                                                                        found:    1, })));
    assert!(get_result("f(1, 2, 3)", &env).is_err());
    assert_eq!(get_result("f(1, 2)", &env).unwrap(), -1.0);
}

#[test]
fn mismatched_calls_do_not_invoke_the_function() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);

    let mut env = Environment::new();
    env.set_function("f", 1, move |args| {
           counter.fetch_add(1, Ordering::SeqCst);
           args[0]
       })
       .unwrap();

    assert!(get_result("f(1, 2)", &env).is_err());
    assert_eq!(calls.load(Ordering::SeqCst), 0);

    assert_eq!(get_result("f(f(2))", &env).unwrap(), 2.0);
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[test]
fn re_registering_replaces_a_function() {
    let mut env = Environment::new();
    env.set_function("f", 1, |args| args[0]).unwrap();
    env.set_function("f", 2, |args| args[0] + args[1]).unwrap();
    assert_eq!(env.function("f").map(|f| f.arity()), Some(2));
    assert_eq!(env.functions().count(), 1);
    assert!(get_result("f(1)", &env).is_err());
}

#[test]
fn builtins() {
    let env = Environment::with_builtins();
    let eval = |src: &str| get_result(src, &env).unwrap();

    assert!((eval("pi") - std::f64::consts::PI).abs() < 1e-15);
    assert!((eval("tau / 2 - pi")).abs() < 1e-15);
    assert_eq!(eval("sqrt(16)"), 4.0);
    assert!((eval("log(2, 8)") - 3.0).abs() < 1e-12);
    assert_eq!(eval("min(3, 1)"), 1.0);
    assert_eq!(eval("max(3, 1)"), 3.0);
    assert_eq!(eval("clamp(5, 0, 2)"), 2.0);
    assert_eq!(eval("clamp(5, 2, 0)"), 2.0);
    assert_eq!(eval("sign(0 - 3)"), -1.0);
    assert_eq!(eval("abs(0 - 2.5)"), 2.5);
    assert_eq!(eval("hypot(3, 4)"), 5.0);
    assert!((eval("degrees(pi)") - 180.0).abs() < 1e-12);

    for name in BUILTIN_FUNCTIONS {
        assert!(env.function(name).is_some(), "missing builtin {name}");
    }
}

#[test]
fn builtins_can_be_overridden() {
    let mut env = Environment::with_builtins();
    env.set_variable("pi", 3.0);
    env.set_function("sqrt", 1, |_| -1.0).unwrap();
    assert_eq!(get_result("sqrt(pi)", &env).unwrap(), -1.0);
}

#[test]
fn environments_are_shareable_across_threads() {
    let mut env = Environment::with_builtins();
    env.set_variable("x", 2.0);
    let env = Arc::new(env);

    let handles: Vec<_> = (0..4).map(|i| {
                                    let env = Arc::clone(&env);
                                    std::thread::spawn(move || {
                                        get_result(&format!("x ^ {i} + floor(pi)"), &env).unwrap()
                                    })
                                })
                                .collect();
    let results: Vec<f64> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(results, [4.0, 5.0, 7.0, 11.0]);
}

#[test]
fn errors_print_their_message() {
    let env = Environment::new();
    let err = get_result("nope", &env).unwrap_err();
    assert_eq!(err.to_string(), "Error: Unknown variable 'nope'.");
}
