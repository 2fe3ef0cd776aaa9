//! Fixed C prologue and epilogue wrapped around the translator's
//! generated routines and `show` printer (§4.5).

const PREAMBLE: &str = r#"#include <stdio.h>
#include <stdlib.h>

typedef struct Value Value;
typedef Value (*Lambda)(Value* env, Value arg);

struct Value {
    Lambda fun;
    Value* env;
};

static Value* tmpenv;
static size_t heap_usage;

Value dummy_lambda(Value* env, Value arg) {
    (void)env;
    (void)arg;
    fprintf(stderr, "dummy lambda invoked\n");
    abort();
}
"#;

const EPILOGUE: &str = r#"int main(void) {
    Value dummy = { .fun = dummy_lambda, .env = NULL };
    Value result = body(NULL, dummy);
    show(result, 0);
    printf("\n");
    fprintf(stderr, "heap usage: %zu\n", heap_usage);
    return 0;
}
"#;

/// Wrap the translator's generated routines and printer function in
/// the fixed runtime prologue and epilogue, producing a complete C
/// translation unit.
pub fn assemble(generated: String) -> String {
    let mut out = String::with_capacity(PREAMBLE.len() + generated.len() + EPILOGUE.len());
    out.push_str(PREAMBLE);
    out.push('\n');
    out.push_str(&generated);
    out.push('\n');
    out.push_str(EPILOGUE);
    out
}
