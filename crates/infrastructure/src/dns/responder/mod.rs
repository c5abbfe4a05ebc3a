mod answer_builder;
mod hickory_responder;
mod traced_responder;

pub use answer_builder::AnswerBuilder;
pub use hickory_responder::HickoryResponder;
pub use traced_responder::TracedDnsResponder;
