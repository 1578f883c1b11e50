use crate::generator::Generator;
use crate::state::State;

pub fn map<A, B, F>(g: Generator<A>, f: F) -> Generator<B>
where
    A: 'static,
    B: Send + Sync + 'static,
    F: Fn(A) -> B + Clone + Send + Sync + 'static,
{
    Generator::new(move |state: State| Ok(g.generate(state)?.map(f.clone())))
}
