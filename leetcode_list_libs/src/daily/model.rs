use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnNull};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyChallengeRecord {
    pub date: String,
    pub user_status: String,
    pub question: DailyQuestion,
}

#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyQuestion {
    #[serde(rename = "questionFrontendId")]
    pub frontend_id: String,
    pub title: String,
    pub title_slug: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub translated_title: String,
}

#[derive(Debug, Serialize)]
pub struct GraphQLRequest<'a, V: Serialize> {
    pub query: &'a str,
    pub variables: V,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DailyQuestionRecordsVariables {
    pub year: i32,
    pub month: u32,
}

#[derive(Debug, Deserialize)]
pub struct GraphQLResponse<D> {
    pub data: D,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyQuestionRecordsData {
    pub daily_question_records: Vec<DailyChallengeRecord>,
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserialize_daily_question_records_response() {
        let body = json!({
            "data": {
                "dailyQuestionRecords": [
                    {
                        "date": "2023-06-01",
                        "userStatus": "FINISH",
                        "question": {
                            "questionFrontendId": "2928",
                            "title": "Distribute Candies Among Children I",
                            "titleSlug": "distribute-candies-among-children-i",
                            "translatedTitle": "给小朋友们分糖果 I"
                        }
                    },
                    {
                        "date": "2023-06-02",
                        "userStatus": "NOT_START",
                        "question": {
                            "questionFrontendId": "1",
                            "title": "Two Sum",
                            "titleSlug": "two-sum",
                            "translatedTitle": null
                        }
                    }
                ]
            }
        });

        let response: GraphQLResponse<DailyQuestionRecordsData> =
            serde_json::from_value(body).unwrap();
        let records = response.data.daily_question_records;

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].date, "2023-06-01");
        assert_eq!(records[0].user_status, "FINISH");
        assert_eq!(records[0].question.frontend_id, "2928");
        assert_eq!(records[0].question.translated_title, "给小朋友们分糖果 I");
        assert_eq!(records[1].question.title_slug, "two-sum");
        assert_eq!(records[1].question.translated_title, "");
    }

    #[test]
    fn serialize_request_body() {
        let request = GraphQLRequest {
            query: "query q { x }",
            variables: DailyQuestionRecordsVariables {
                year: 2023,
                month: 6,
            },
        };

        let expected = String::from(r#"{"query":"query q { x }","variables":{"year":2023,"month":6}}"#);
        assert_eq!(expected, serde_json::to_string(&request).unwrap());
    }
}
