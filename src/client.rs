use log::debug;
use postman::{HttpTransport, Method, Request, RequestBody, Transport};
use serde::de::DeserializeOwned;

use crate::{
    consts::{DISCORD_API, USER_AGENT},
    errors::Error,
    models::{
        ApplicationId, EditInteractionResponseData, InteractionId, InteractionResponse,
        InteractionResponseData, InteractionResponseType, Message, MessageId, Uploads,
    },
    routes::Route,
    validate::{
        check_allowed_mentions, check_new_message, check_update_message, validate_embeds,
    },
};

/// Encodes a payload as plain JSON, or as multipart when there are files to upload.
pub fn encode_body<P: Uploads>(payload: &P) -> Result<RequestBody, Error> {
    let json = serde_json::to_vec(payload).map_err(Error::Encode)?;

    if payload.needs_multipart() {
        Ok(RequestBody::Multipart { payload_json: json, files: payload.files().to_vec() })
    } else {
        Ok(RequestBody::Json(json))
    }
}

fn validate_edit(data: &mut EditInteractionResponseData) -> Result<(), Error> {
    check_allowed_mentions(data.allowed_mentions.as_ref())?;
    validate_embeds(data.embeds.as_mut())
}

fn validate_followup(data: &mut InteractionResponseData) -> Result<(), Error> {
    check_new_message(&data.content, data.embeds.as_deref(), &data.files)?;
    check_allowed_mentions(data.allowed_mentions.as_ref())?;
    validate_embeds(data.embeds.as_mut())
}

fn validate_response(response: &mut InteractionResponse) -> Result<(), Error> {
    let data = match response.data.as_mut() {
        Some(data) => data,
        None => return Ok(()),
    };

    match response.kind {
        InteractionResponseType::ChannelMessageWithSource => {
            check_new_message(&data.content, data.embeds.as_deref(), &data.files)?
        }
        InteractionResponseType::UpdateMessage => {
            check_update_message(&data.content, data.embeds.as_deref(), &data.files)?
        }
        _ => {}
    }

    check_allowed_mentions(data.allowed_mentions.as_ref())?;
    validate_embeds(data.embeds.as_mut())
}

/// Client for the interaction callback and interaction webhook endpoints.
///
/// Payloads are validated before anything is sent. Embeds in a payload are
/// replaced with their normalized form once validation passes.
#[derive(Clone, Debug)]
pub struct Client<T = HttpTransport> {
    transport: T,
}

impl Client<HttpTransport> {
    pub fn new(api_base: &str) -> Result<Self, Error> {
        Ok(Self::with_transport(HttpTransport::new(api_base, &USER_AGENT)?))
    }

    /// Uses `DISCORD_API` and `USER_AGENT` from the environment.
    pub fn from_env() -> Result<Self, Error> {
        Self::new(&DISCORD_API)
    }
}

impl<T: Transport> Client<T> {
    pub fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    async fn request(
        &self,
        method: Method,
        route: Route<'_>,
        body: Option<RequestBody>,
    ) -> Result<Vec<u8>, Error> {
        let request = Request::new(method, route.to_string()).body(body);

        Ok(self.transport.send(request).await?)
    }

    async fn request_json<R: DeserializeOwned>(
        &self,
        method: Method,
        route: Route<'_>,
        body: Option<RequestBody>,
    ) -> Result<R, Error> {
        let bytes = self.request(method, route, body).await?;

        serde_json::from_slice(&bytes).map_err(Error::Decode)
    }

    /// Responds to an incoming interaction, also known as the interaction callback.
    pub async fn respond_interaction(
        &self,
        interaction_id: InteractionId,
        token: &str,
        response: &mut InteractionResponse,
    ) -> Result<(), Error> {
        validate_response(response)?;

        debug!("responding to interaction {} with {:?}", interaction_id, response.kind);

        let body = encode_body(&*response)?;

        self.request(
            Method::POST,
            Route::InteractionCallback { interaction_id, token },
            Some(body),
        )
        .await?;

        Ok(())
    }

    /// Fetches the initial interaction response.
    pub async fn interaction_response(
        &self,
        application_id: ApplicationId,
        token: &str,
    ) -> Result<Message, Error> {
        self.request_json(Method::GET, Route::OriginalResponse { application_id, token }, None)
            .await
    }

    pub async fn edit_interaction_response(
        &self,
        application_id: ApplicationId,
        token: &str,
        data: &mut EditInteractionResponseData,
    ) -> Result<Message, Error> {
        validate_edit(data)?;

        let body = encode_body(&*data)?;

        self.request_json(
            Method::PATCH,
            Route::OriginalResponse { application_id, token },
            Some(body),
        )
        .await
    }

    pub async fn delete_interaction_response(
        &self,
        application_id: ApplicationId,
        token: &str,
    ) -> Result<(), Error> {
        self.request(Method::DELETE, Route::OriginalResponse { application_id, token }, None)
            .await?;

        Ok(())
    }

    #[deprecated(note = "use `follow_up_interaction` instead")]
    pub async fn create_interaction_followup(
        &self,
        application_id: ApplicationId,
        token: &str,
        data: &mut InteractionResponseData,
    ) -> Result<Message, Error> {
        self.follow_up_interaction(application_id, token, data).await
    }

    /// Sends a follow-up message for an interaction.
    pub async fn follow_up_interaction(
        &self,
        application_id: ApplicationId,
        token: &str,
        data: &mut InteractionResponseData,
    ) -> Result<Message, Error> {
        validate_followup(data)?;

        let body = encode_body(&*data)?;

        self.request_json(Method::POST, Route::Followups { application_id, token }, Some(body))
            .await
    }

    pub async fn edit_interaction_followup(
        &self,
        application_id: ApplicationId,
        message_id: MessageId,
        token: &str,
        data: &mut EditInteractionResponseData,
    ) -> Result<Message, Error> {
        validate_edit(data)?;

        let body = encode_body(&*data)?;

        self.request_json(
            Method::PATCH,
            Route::Followup { application_id, token, message_id },
            Some(body),
        )
        .await
    }

    pub async fn delete_interaction_followup(
        &self,
        application_id: ApplicationId,
        message_id: MessageId,
        token: &str,
    ) -> Result<(), Error> {
        self.request(Method::DELETE, Route::Followup { application_id, token, message_id }, None)
            .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use serde_json::{json, Value};

    use postman::File;

    use super::*;
    use crate::models::{
        AllowedMentions, Component, Embed, InputTextStyle, MentionType, Nullable, StringChoice,
        UserId,
    };

    const TOKEN: &str = "interaction-token";
    const APP: ApplicationId = ApplicationId(10);

    struct RecordingTransport {
        requests: Mutex<Vec<Request>>,
        response: Vec<u8>,
    }

    impl RecordingTransport {
        fn new(response: Value) -> Self {
            Self { requests: Mutex::new(vec![]), response: response.to_string().into_bytes() }
        }

        fn requests(&self) -> Vec<Request> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Transport for RecordingTransport {
        async fn send(&self, request: Request) -> Result<Vec<u8>, postman::Error> {
            self.requests.lock().unwrap().push(request);

            Ok(self.response.clone())
        }
    }

    fn client() -> Client<RecordingTransport> {
        Client::with_transport(RecordingTransport::new(json!({
            "id": "55",
            "channel_id": "66",
            "content": "sent"
        })))
    }

    fn json_body(request: &Request) -> Value {
        match &request.body {
            Some(RequestBody::Json(json)) => serde_json::from_slice(json).unwrap(),
            other => panic!("expected JSON body, got {:?}", other),
        }
    }

    fn multipart_body(request: &Request) -> (Value, Vec<&str>) {
        match &request.body {
            Some(RequestBody::Multipart { payload_json, files }) => (
                serde_json::from_slice(payload_json).unwrap(),
                files.iter().map(|f| f.name.as_str()).collect(),
            ),
            other => panic!("expected multipart body, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn respond_posts_callback() {
        let client = client();
        let mut response =
            InteractionResponse::message(InteractionResponseData::new().content("pong"));

        client.respond_interaction(InteractionId(3), TOKEN, &mut response).await.unwrap();

        let requests = client.transport().requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, Method::POST);
        assert_eq!(requests[0].route, "interactions/3/interaction-token/callback");
        assert_eq!(json_body(&requests[0]), json!({ "type": 4, "data": { "content": "pong" } }));
    }

    #[tokio::test]
    async fn empty_message_response_never_reaches_transport() {
        let client = client();
        let mut response = InteractionResponse::message(InteractionResponseData::new());

        let err = client.respond_interaction(InteractionId(3), TOKEN, &mut response).await;

        assert!(matches!(err, Err(Error::EmptyPayload)));
        assert!(client.transport().requests().is_empty());
    }

    #[tokio::test]
    async fn update_rule_applies_only_to_update_callbacks() {
        let client = client();
        let cleared = InteractionResponseData {
            content: Nullable::Null,
            embeds: Some(vec![]),
            ..Default::default()
        };

        let mut update = InteractionResponse::update(cleared.clone());
        assert!(matches!(
            client.respond_interaction(InteractionId(3), TOKEN, &mut update).await,
            Err(Error::EmptyPayload)
        ));

        let mut untouched = InteractionResponse::update(InteractionResponseData::new());
        client.respond_interaction(InteractionId(3), TOKEN, &mut untouched).await.unwrap();

        let mut deferred =
            InteractionResponse::new(InteractionResponseType::DeferredUpdateMessage, Some(cleared));
        client.respond_interaction(InteractionId(3), TOKEN, &mut deferred).await.unwrap();

        let mut pong = InteractionResponse::pong();
        client.respond_interaction(InteractionId(3), TOKEN, &mut pong).await.unwrap();

        let mut autocomplete = InteractionResponse::autocomplete(vec![StringChoice {
            name: "UTC".to_string(),
            value: "UTC".to_string(),
        }]);
        client.respond_interaction(InteractionId(3), TOKEN, &mut autocomplete).await.unwrap();

        let mut modal = InteractionResponse::modal(
            "macro:record",
            "Record macro",
            vec![Component::action_row(vec![Component::text_input(
                InputTextStyle::Short,
                "name",
                "Name",
            )])],
        );
        client.respond_interaction(InteractionId(3), TOKEN, &mut modal).await.unwrap();

        let requests = client.transport().requests();
        assert_eq!(requests.len(), 5);
        assert_eq!(json_body(&requests[3])["type"], 8);
        assert!(json_body(&requests[3])["data"].get("content").is_none());
        assert_eq!(json_body(&requests[4])["type"], 9);
        assert!(json_body(&requests[4])["data"].get("embeds").is_none());
    }

    #[tokio::test]
    async fn emptiness_is_checked_before_mentions() {
        let client = client();
        let mut data = InteractionResponseData::new()
            .allowed_mentions(AllowedMentions::none().parse(MentionType::Users).user(UserId(1)));

        let err = client.follow_up_interaction(APP, TOKEN, &mut data).await;

        assert!(matches!(err, Err(Error::EmptyPayload)));
    }

    #[tokio::test]
    async fn mentions_are_checked_before_embeds() {
        let client = client();
        let mut data = InteractionResponseData::new()
            .content("hi")
            .embed(Embed::new().title("t".repeat(300)))
            .allowed_mentions(AllowedMentions::none().parse(MentionType::Users).user(UserId(1)));

        let err = client.follow_up_interaction(APP, TOKEN, &mut data).await;

        assert!(matches!(err, Err(Error::MentionPolicy(_))));
        assert!(client.transport().requests().is_empty());
    }

    #[tokio::test]
    async fn follow_up_returns_message_and_normalizes_embeds() {
        let client = client();
        let mut data = InteractionResponseData::new().embed(Embed::new().title("Reminder"));

        let message = client.follow_up_interaction(APP, TOKEN, &mut data).await.unwrap();

        assert_eq!(message.id, MessageId(55));
        assert_eq!(data.embeds.as_ref().unwrap()[0].kind.as_deref(), Some("rich"));

        let requests = client.transport().requests();
        assert_eq!(requests[0].route, "webhooks/10/interaction-token");
        assert_eq!(json_body(&requests[0])["embeds"][0]["type"], "rich");
    }

    #[tokio::test]
    async fn files_switch_to_multipart_in_order() {
        let client = client();
        let mut data = InteractionResponseData::new()
            .file(File::new("one.txt", b"1".to_vec()))
            .file(File::new("two.txt", b"2".to_vec()));

        client.follow_up_interaction(APP, TOKEN, &mut data).await.unwrap();

        let requests = client.transport().requests();
        let (payload, names) = multipart_body(&requests[0]);
        assert_eq!(payload, json!({}));
        assert_eq!(names, ["one.txt", "two.txt"]);
    }

    #[tokio::test]
    async fn callback_files_switch_to_multipart() {
        let client = client();
        let mut response = InteractionResponse::message(
            InteractionResponseData::new()
                .content("export")
                .file(File::new("reminders.csv", b"id,content".to_vec()))
                .file(File::new("todos.csv", b"id,value".to_vec())),
        );

        client.respond_interaction(InteractionId(3), TOKEN, &mut response).await.unwrap();

        let requests = client.transport().requests();
        let (payload, names) = multipart_body(&requests[0]);
        assert_eq!(requests[0].route, "interactions/3/interaction-token/callback");
        assert_eq!(payload, json!({ "type": 4, "data": { "content": "export" } }));
        assert_eq!(names, ["reminders.csv", "todos.csv"]);
    }

    #[tokio::test]
    async fn edit_files_switch_to_multipart_in_order() {
        let client = client();
        let mut data = EditInteractionResponseData::new()
            .content("replaced")
            .file(File::new("a.png", vec![1]))
            .file(File::new("b.png", vec![2]))
            .file(File::new("c.png", vec![3]));

        client.edit_interaction_response(APP, TOKEN, &mut data).await.unwrap();
        client.edit_interaction_followup(APP, MessageId(77), TOKEN, &mut data).await.unwrap();

        let requests = client.transport().requests();
        assert_eq!(requests.len(), 2);
        for request in &requests {
            let (payload, names) = multipart_body(request);
            assert_eq!(request.method, Method::PATCH);
            assert_eq!(payload, json!({ "content": "replaced" }));
            assert_eq!(names, ["a.png", "b.png", "c.png"]);
        }
        assert_eq!(requests[1].route, "webhooks/10/interaction-token/messages/77");
    }

    #[tokio::test]
    async fn edits_skip_emptiness_check() {
        let client = client();
        let mut data = EditInteractionResponseData::new().clear_content().embeds(vec![]);

        client.edit_interaction_response(APP, TOKEN, &mut data).await.unwrap();
        client.edit_interaction_followup(APP, MessageId(77), TOKEN, &mut data).await.unwrap();

        let requests = client.transport().requests();
        assert_eq!(requests[0].method, Method::PATCH);
        assert_eq!(requests[0].route, "webhooks/10/interaction-token/messages/@original");
        assert_eq!(requests[1].route, "webhooks/10/interaction-token/messages/77");
        assert_eq!(json_body(&requests[1]), json!({ "content": null, "embeds": [] }));
    }

    #[tokio::test]
    async fn edit_embed_budget_is_enforced() {
        let client = client();
        let mut data = EditInteractionResponseData::new().embeds(vec![
            Embed::new().description("a".repeat(4000)),
            Embed::new().description("b".repeat(3000)),
        ]);

        let err = client.edit_interaction_followup(APP, MessageId(77), TOKEN, &mut data).await;

        assert!(matches!(err, Err(Error::EmbedBudgetExceeded { count: 7000, max: 6000, .. })));
        assert!(client.transport().requests().is_empty());
    }

    #[tokio::test]
    async fn fetch_and_delete_send_no_body() {
        let client = client();

        let original = client.interaction_response(APP, TOKEN).await.unwrap();
        client.delete_interaction_response(APP, TOKEN).await.unwrap();
        client.delete_interaction_followup(APP, MessageId(77), TOKEN).await.unwrap();

        assert_eq!(original.content, "sent");

        let requests = client.transport().requests();
        assert_eq!(
            requests.iter().map(|r| (r.method.clone(), r.route.as_str())).collect::<Vec<_>>(),
            [
                (Method::GET, "webhooks/10/interaction-token/messages/@original"),
                (Method::DELETE, "webhooks/10/interaction-token/messages/@original"),
                (Method::DELETE, "webhooks/10/interaction-token/messages/77"),
            ]
        );
        assert!(requests.iter().all(|r| r.body.is_none()));
    }

    #[tokio::test]
    async fn undecodable_response_is_reported() {
        let client = Client::with_transport(RecordingTransport::new(json!({ "unexpected": true })));

        let err = client.interaction_response(APP, TOKEN).await;

        assert!(matches!(err, Err(Error::Decode(_))));
    }

    #[test]
    fn encode_body_selects_mode_from_files() {
        let payload = InteractionResponseData::new().content("hi");

        assert!(matches!(encode_body(&payload), Ok(RequestBody::Json(_))));
        assert!(encode_body(&payload.file(File::new("a", vec![0u8]))).unwrap().is_multipart());
    }
}
