pub mod answer_question_route;
pub mod answer_request;
