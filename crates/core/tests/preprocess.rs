use mdgloss_core::{Preprocessor, PreprocessorConfig};

fn preprocess(content: &str) -> String {
    let config = PreprocessorConfig::default();
    Preprocessor::new(&config)
        .preprocess_section(content, None)
        .body
}

#[test]
fn full_docstring_section() {
    let input = "\
Summarize the frobnicator.

Args:
    value: the raw input
    scale: multiplier applied to #value

Returns:
    float: the frobnicated result

Example:

    >>> frob(2)
    4.0

See #frob.inverse() for the reverse operation.";

    insta::assert_snapshot!(preprocess(input), @r##"
Summarize the frobnicator.

__Arguments__

* __value__: the raw input
* __scale__: multiplier applied to `value`

__Returns__

`float`:the frobnicated result

Example:

```python
    >>> frob(2)
    4.0
```

See `frob.inverse()` for the reverse operation.
"##);
}

#[test]
fn docstring_with_fence_and_attributes() {
    let input = "\
Attributes:
    cache: most recent results

```text
Args:
    literal: untouched
```

Raises:
    KeyError: when the key is missing";

    let body = preprocess(input);

    assert!(body.contains("__Attributes__"));
    assert!(body.contains("* `cache`: most recent results"));
    // Fenced content is not rewritten by the line pipeline.
    assert!(body.contains("Args:\n    literal: untouched"));
    assert!(body.contains("__Raises__"));
    assert!(body.contains("* `KeyError`: when the key is missing"));
}

#[test]
fn title_and_body_are_returned_together() {
    let config = PreprocessorConfig {
        header_anchor_enabled: true,
    };
    let result = Preprocessor::new(&config)
        .preprocess_section("Does a thing with #gadget.", Some("run_all(*tasks)"));

    assert_eq!(result.title.as_deref(), Some(r"run\_all(\*tasks)  {#run\_all}"));
    assert_eq!(result.body, "Does a thing with `gadget`.");
}
