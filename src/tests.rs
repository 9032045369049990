use crate::{
    ArgumentAccumulator, ArgumentCountError, Curry, Database, FnTarget, Keywords, Object, ParamKind, Parameter, ParameterSignature, PrettyExt,
    RegistryExt, Result, TargetRef, UnknownKeywordError, Value,
};
use std::cell::RefCell;
use std::rc::Rc;

fn mixed_signature() -> ParameterSignature {
    vec![
        (ParamKind::Positional, "a"),
        (ParamKind::Positional, "b"),
        (ParamKind::RequiredKeyword, "c"),
        (ParamKind::RequiredKeyword, "d"),
    ]
    .into_iter()
    .collect()
}

fn recording_target(name: &str, parameters: Vec<Parameter>) -> (TargetRef, Rc<RefCell<Vec<Vec<Value>>>>) {
    let calls = Rc::new(RefCell::new(Vec::new()));
    let target = {
        let calls = calls.clone();
        FnTarget::new(name, parameters, move |args| {
            calls.borrow_mut().push(args);
            Ok(Value::from("done"))
        })
    };

    (TargetRef::new(target), calls)
}

#[test]
fn test_signature_partitions_parameters() {
    let signature = ParameterSignature::new(vec![
        Parameter::keyword("c"),
        Parameter::positional("a"),
        Parameter::keyword("d"),
        Parameter::positional("b"),
    ]);

    assert_eq!(signature.arity(), 2);
    assert_eq!(
        signature.positional().iter().map(|p| p.name.as_str()).collect::<Vec<_>>(),
        vec!["a", "b"]
    );
    assert_eq!(
        signature.parameters().map(|p| p.name.as_str()).collect::<Vec<_>>(),
        vec!["a", "b", "c", "d"]
    );
    assert!(signature.is_required_keyword("d"));
    assert!(!signature.is_required_keyword("a"));
}

#[test]
fn test_empty_accumulator_lists_every_slot() {
    let arguments = ArgumentAccumulator::new(mixed_signature());
    assert!(!arguments.is_fulfilled());
    assert_eq!(arguments.positional().len(), 2);
    assert_eq!(arguments.keyword().len(), 2);
    assert_eq!(arguments.to_string(), "a=, b=, c:, d:");
    assert_eq!(arguments.missing().map(|p| p.name.to_string()).collect::<Vec<_>>(), vec!["a", "b", "c", "d"]);
}

#[test]
fn test_create_splits_trailing_keywords() -> Result<()> {
    let values = vec![Value::from(1), Value::from(2), keywords! { d => 4, c => 3 }];
    let arguments = ArgumentAccumulator::create(mixed_signature(), values)?;
    assert!(arguments.is_fulfilled());
    assert_eq!(arguments.to_string(), "a=1, b=2, c:3, d:4");
    assert_eq!(
        arguments.to_invocation_args(),
        vec![Value::from(1), Value::from(2), keywords! { c => 3, d => 4 }]
    );
    Ok(())
}

#[test]
fn test_map_within_arity_is_positional() -> Result<()> {
    let signature = ParameterSignature::new(vec![Parameter::positional("a"), Parameter::positional("b")]);
    let arguments = ArgumentAccumulator::create(signature, vec![keywords! { x => 1 }])?;
    assert_eq!(arguments.positional()[0].value(), Some(&keywords! { x => 1 }));
    assert!(!arguments.positional()[1].is_fulfilled());
    Ok(())
}

#[test]
fn test_nil_fulfils_a_slot() -> Result<()> {
    let signature = ParameterSignature::new(vec![Parameter::positional("a")]);
    let arguments = ArgumentAccumulator::create(signature, vec![Value::Nil])?;
    assert!(arguments.is_fulfilled());
    assert_eq!(arguments.to_string(), "a=nil");
    Ok(())
}

#[test]
fn test_too_many_positional() {
    let signature = ParameterSignature::new(vec![Parameter::positional("a"), Parameter::positional("b"), Parameter::positional("c")]);
    let e = ArgumentAccumulator::create(signature, (1..=4_i64).map(Value::from)).expect_err("expected an argument count error");
    assert_eq!(e.to_string(), "wrong number of arguments (4 for 3)");
    assert_eq!(e.downcast_ref::<ArgumentCountError>(), Some(&ArgumentCountError { given: 4, arity: 3 }));
}

#[test]
fn test_unknown_keywords_are_listed_in_order() {
    let e = ArgumentAccumulator::create(mixed_signature(), vec![Value::from(1), Value::from(2), keywords! { f => 1, c => 3, e => 2 }])
        .expect_err("expected an unknown keyword error");
    assert_eq!(e.to_string(), "unknown keywords: f, e");
    assert_eq!(
        e.downcast_ref::<UnknownKeywordError>(),
        Some(&UnknownKeywordError {
            names: vec!["f".to_owned(), "e".to_owned()]
        })
    );
}

#[test]
fn test_single_unknown_keyword_is_singular() {
    let signature = ParameterSignature::new(vec![Parameter::keyword("a")]);
    let e = ArgumentAccumulator::create(signature, vec![keywords! { e => "x" }]).expect_err("expected an unknown keyword error");
    assert_eq!(e.to_string(), "unknown keyword: e");
}

#[test]
fn test_merge_leaves_receiver_unchanged() -> Result<()> {
    let empty = ArgumentAccumulator::new(mixed_signature());
    let first = empty.merge(vec![Value::from(1)])?;
    let second = first.merge(vec![Value::from(2), keywords! { c => 3 }])?;

    assert_eq!(empty.to_string(), "a=, b=, c:, d:");
    assert_eq!(first.to_string(), "a=1, b=, c:, d:");
    assert_eq!(second.to_string(), "a=1, b=2, c:3, d:");
    assert_eq!(second.missing().map(|p| p.name.to_string()).collect::<Vec<_>>(), vec!["d"]);
    Ok(())
}

#[test]
fn test_merge_keywords_override_earlier_values() -> Result<()> {
    let arguments = ArgumentAccumulator::create(mixed_signature(), vec![Value::from(1), Value::from(2), keywords! { c => 3 }])?;
    let arguments = arguments.merge(vec![keywords! { c => 30, d => 4 }])?;
    assert_eq!(
        arguments.to_invocation_args(),
        vec![Value::from(1), Value::from(2), keywords! { c => 30, d => 4 }]
    );
    Ok(())
}

#[test]
fn test_merge_reports_cumulative_count() -> Result<()> {
    let arguments = ArgumentAccumulator::create(mixed_signature(), vec![Value::from(1), Value::from(2), keywords! { c => 3 }])?;
    let e = arguments.merge(vec![Value::from(4)]).expect_err("expected an argument count error");
    assert_eq!(e.to_string(), "wrong number of arguments (4 for 2)");
    Ok(())
}

#[test]
fn test_trailing_keyword_maps_merge_in_one_call() -> Result<()> {
    let values = vec![Value::from(1), Value::from(2), keywords! { c => 3 }, keywords! { d => 4, c => 30 }];
    let arguments = ArgumentAccumulator::create(mixed_signature(), values)?;
    assert!(arguments.is_fulfilled());
    assert_eq!(arguments.to_string(), "a=1, b=2, c:30, d:4");
    assert_eq!(
        arguments.to_invocation_args(),
        vec![Value::from(1), Value::from(2), keywords! { c => 30, d => 4 }]
    );
    Ok(())
}

#[test]
fn test_value_after_trailing_keywords_is_counted() {
    let values = vec![Value::from(1), Value::from(2), keywords! { c => 3 }, keywords! { d => 4 }, Value::from(5)];
    let e = ArgumentAccumulator::create(mixed_signature(), values).expect_err("expected an argument count error");
    assert_eq!(e.to_string(), "wrong number of arguments (5 for 2)");
}

#[test]
fn test_values_render_like_inspect() -> Result<()> {
    let signature = ParameterSignature::new(vec![Parameter::positional("flags"), Parameter::keyword("name")]);
    let list = Value::from(vec![Value::from(true), Value::Nil, Value::from(3)]);
    let arguments = ArgumentAccumulator::create(signature, vec![list, keywords! { name => "x" }])?;
    assert_eq!(arguments.to_string(), "flags=[true, nil, 3], name:\"x\"");
    assert_eq!(arguments.keyword()[0].parameter().kind, ParamKind::RequiredKeyword);
    Ok(())
}

#[test]
fn test_keywords_insert_keeps_position() {
    let mut keywords = Keywords::new().with("a", 1).with("b", 2);
    keywords.insert("a", 10);
    assert_eq!(keywords.names().map(|name| name.as_str()).collect::<Vec<_>>(), vec!["a", "b"]);
    assert_eq!(keywords.get("a"), Some(&Value::from(10)));
    assert_eq!(Value::from(keywords).to_string(), "{a: 10, b: 2}");
}

#[test]
fn test_objects_compare_by_identity() {
    let a = Object::new("a", 1);
    let same = a.clone();
    let other = Object::new("a", 1);
    assert_eq!(Value::from(a.clone()), Value::from(same));
    assert_ne!(Value::from(a.clone()), Value::from(other));
    assert_eq!(a.downcast_ref::<i32>(), Some(&1));
    assert_eq!(a.to_string(), "#<a>");
}

#[test]
fn test_curry_describe() -> Result<()> {
    let (target, calls) = recording_target("Mixed", mixed_signature().parameters().cloned().collect());
    let curry = Curry::new(target);
    assert_eq!(curry.describe(), "Curry<Mixed>(a=, b=, c:, d:)");

    let curry = curry.call(vec![Value::from("x")])?.into_curry()?;
    assert_eq!(curry.describe(), "Curry<Mixed>(a=\"x\", b=, c:, d:)");
    assert_eq!(curry.pretty_print_arguments().to_string(), "a=\"x\", b=, c:, d:");
    assert!(calls.borrow().is_empty());
    Ok(())
}

#[test]
fn test_curry_without_parameters_invokes_immediately() -> Result<()> {
    let (target, calls) = recording_target("Nullary", vec![]);
    let value = Curry::new(target).call(Vec::new())?.into_value()?;
    assert_eq!(value, Value::from("done"));
    assert_eq!(*calls.borrow(), vec![Vec::<Value>::new()]);
    Ok(())
}

#[test]
fn test_outcome_conversion_errors() -> Result<()> {
    let (target, _calls) = recording_target("Single", vec![Parameter::positional("a")]);
    let curry = Curry::new(target);
    let outcome = curry.call(Vec::new())?;
    assert!(!outcome.is_invoked());
    assert_eq!(
        outcome.into_value().expect_err("expected a curry").to_string(),
        "expected the target to have been invoked"
    );
    Ok(())
}

#[test]
fn test_registry_memoises_signature() -> Result<()> {
    let mut db = Database::new();
    let parameters = mixed_signature().parameters().cloned().collect();
    let registered = db.register(FnTarget::new("Mixed", parameters, |_args| Ok(Value::Nil)));

    let curry = db.curry("Mixed")?;
    assert_eq!(curry.target(), &registered);
    assert_eq!(curry.arguments().signature(), &mixed_signature());
    assert_eq!(db.curry("Missing").expect_err("expected an undefined target").to_string(), "undefined target Missing");
    Ok(())
}
