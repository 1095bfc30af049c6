use crate::core::error::ValidationError;
use crate::core::field::ToFieldValue;
use crate::core::validation::{Validate, check, filters, validators};

crate::impl_record!(
    Faq,
    "faq",
    "faqs",
    search: ["question", "answer"],
    {
        question: String,
        answer: String,
    }
);

impl Validate for Faq {
    fn normalize(&mut self) {
        self.question = filters::trim(&self.question);
        self.answer = filters::trim(&self.answer);
    }

    fn validate(&self) -> Result<(), ValidationError> {
        let mut errors = ValidationError::new();
        check(
            &mut errors,
            "question",
            &self.question.to_field_value(),
            validators::required(),
        );
        check(&mut errors, "answer", &self.answer.to_field_value(), validators::required());
        errors.into_result()
    }
}
