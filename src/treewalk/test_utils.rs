use crate::{
    domain::{ExecutionError, Source},
    treewalk::Value,
    LuxorContext, LuxorError,
};

pub fn init(text: &str) -> LuxorContext {
    LuxorContext::new(Source::from_text(text))
}

pub fn eval(text: &str) -> Value {
    init(text).run().expect("Failed to evaluate test string!")
}

pub fn eval_expect_error(text: &str) -> ExecutionError {
    let mut context = init(text);
    run_expect_error(&mut context)
}

pub fn run(text: &str) -> LuxorContext {
    let mut context = init(text);
    context.run().expect("Evaluation failed!");
    context
}

pub fn run_expect_error(context: &mut LuxorContext) -> ExecutionError {
    match context.run() {
        Ok(_) => panic!("Expected an error!"),
        Err(LuxorError::Execution(e)) => e,
        Err(_) => panic!("Expected an execution error!"),
    }
}

pub fn read_optional(ctx: &LuxorContext, name: &str) -> Option<Value> {
    ctx.read(name)
}

pub fn read(ctx: &LuxorContext, name: &str) -> Value {
    read_optional(ctx, name).expect("Failed to read var")
}
