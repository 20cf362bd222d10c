use crate::probe::Evaluation;

/// Receives evaluations one at a time, in target order.
pub trait ResultSink {
    fn record(&mut self, evaluation: &Evaluation);
}

impl<F> ResultSink for F
where
    F: FnMut(&Evaluation),
{
    fn record(&mut self, evaluation: &Evaluation) {
        self(evaluation);
    }
}

/// Fan out to two sinks (e.g. console and HTML report).
impl<A, B> ResultSink for (A, B)
where
    A: ResultSink,
    B: ResultSink,
{
    fn record(&mut self, evaluation: &Evaluation) {
        self.0.record(evaluation);
        self.1.record(evaluation);
    }
}
