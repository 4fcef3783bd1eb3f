use aula_entity::quiz::answer::Model as AnswerModel;
use aula_entity::quiz::question::Model as QuestionModel;
use aula_entity::quiz::quiz::Model as QuizModel;
use aula_entity::quiz::result::Model as ResultModel;

use crate::convert::FromDbModel;
use crate::quiz::answer::QuizAnswer;
use crate::quiz::question::QuizQuestion;
use crate::quiz::quiz::Quiz;
use crate::quiz::result::QuizResult;

impl FromDbModel<QuizModel> for Quiz {
    fn from_db_model(model: QuizModel) -> Self {
        Self {
            quiz_id: model.id,
            course_id: model.course_id,
            name: model.name,
            description: model.description,
            created_at: model.created_at,
        }
    }
}

impl FromDbModel<QuestionModel> for QuizQuestion {
    fn from_db_model(model: QuestionModel) -> Self {
        Self {
            question_id: model.id,
            quiz_id: model.quiz_id,
            text: model.text,
            created_at: model.created_at,
        }
    }
}

impl FromDbModel<AnswerModel> for QuizAnswer {
    fn from_db_model(model: AnswerModel) -> Self {
        Self {
            answer_id: model.id,
            question_id: model.question_id,
            text: model.text,
            answer_type: model.answer_type,
            is_correct: model.is_correct,
        }
    }
}

impl FromDbModel<ResultModel> for QuizResult {
    fn from_db_model(model: ResultModel) -> Self {
        Self {
            result_id: model.id,
            quiz_id: model.quiz_id,
            student_id: model.student_id,
            score: model.score,
            completed_at: model.completed_at,
        }
    }
}
