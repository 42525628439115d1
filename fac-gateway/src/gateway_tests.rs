//! Gateway facade unit tests.

#[cfg(test)]
pub(crate) mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use fac_types::{
        AcquirerTransport, Card, GatewayError, ModificationType, RawResponse, RequestError,
        TransactionCode, TransportError,
    };

    use crate::codec::NAMESPACE;
    use crate::{
        AcquirerRequest, CardTransactionParams, Gateway, GatewayConfig, HostedPageParams,
        HostedPageResultParams, ModificationParams, TransactionStatusParams,
    };

    /// Transport that records every post and answers with a canned reply.
    pub struct MockTransport {
        reply: Result<RawResponse, ()>,
        pub posts: Mutex<Vec<(String, String)>>,
    }

    impl MockTransport {
        pub fn replying(status: u16, body: &str) -> Self {
            Self {
                reply: Ok(RawResponse {
                    status,
                    body: body.to_string(),
                }),
                posts: Mutex::new(Vec::new()),
            }
        }

        pub fn unreachable() -> Self {
            Self {
                reply: Err(()),
                posts: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl AcquirerTransport for MockTransport {
        async fn post(
            &self,
            url: &str,
            _content_type: &str,
            body: String,
        ) -> Result<RawResponse, TransportError> {
            self.posts.lock().unwrap().push((url.to_string(), body));
            self.reply
                .clone()
                .map_err(|_| TransportError::Connection("connection refused".into()))
        }
    }

    fn gateway() -> Gateway {
        Gateway::new(
            GatewayConfig::new()
                .with_merchant_id(123456)
                .with_merchant_password("abcdefg")
                .with_acquirer_id(12345)
                .with_test_mode(true),
        )
        .unwrap()
    }

    fn valid_card() -> Card {
        Card::new("4111111111111111", 12, 2099).with_cvv("123")
    }

    fn card_params() -> CardTransactionParams {
        CardTransactionParams::new("10.00", "USD", "1234", valid_card())
    }

    const APPROVED_AUTH: &str = "<AuthorizeResponse><AcquirerId>12345</AcquirerId>\
        <CreditCardTransactionResults><AuthCode>654321</AuthCode>\
        <ReasonCode>1</ReasonCode><ReasonCodeDescription>Transaction is approved.</ReasonCodeDescription>\
        <ReferenceNumber>307916543749</ReferenceNumber><ResponseCode>1</ResponseCode>\
        </CreditCardTransactionResults><MerchantId>123456</MerchantId>\
        <OrderNumber>1234</OrderNumber></AuthorizeResponse>";

    #[test]
    fn test_gateway_can_be_initialized() {
        let gateway = gateway();

        assert_eq!(gateway.name(), "First Atlantic Commerce.");
        assert_eq!(gateway.short_name(), "FAC");
        assert_eq!(gateway.config().merchant_id.as_deref(), Some("123456"));
        assert_eq!(gateway.config().acquirer_id.as_deref(), Some("12345"));
        assert!(gateway.test_mode());
    }

    #[test]
    fn test_missing_credentials_fail_before_building() {
        let result = Gateway::new(GatewayConfig::new().with_merchant_password("abcdefg"));
        assert!(matches!(
            result,
            Err(RequestError::MissingCredentials("merchantId"))
        ));
    }

    #[test]
    fn test_authorize() {
        let request = gateway().authorize(card_params()).unwrap();
        let json = serde_json::to_value(request.data()).unwrap();

        assert_eq!(json["TransactionDetails"]["Amount"], "000000001000");
        assert_eq!(json["TransactionDetails"]["Currency"], "840");
    }

    #[test]
    fn test_purchase() {
        let request = gateway().purchase(card_params()).unwrap();
        let json = serde_json::to_value(request.data()).unwrap();

        assert_eq!(json["TransactionDetails"]["Amount"], "000000001000");
        assert_eq!(json["TransactionDetails"]["Currency"], "840");
        assert_eq!(json["TransactionDetails"]["TransactionCode"], 8);
    }

    #[test]
    fn test_purchase_with_create_card() {
        let request = gateway()
            .purchase(card_params().with_create_card(true))
            .unwrap();
        let json = serde_json::to_value(request.data()).unwrap();

        assert_eq!(json["TransactionDetails"]["Amount"], "000000001000");
        assert_eq!(json["TransactionDetails"]["Currency"], "840");
        assert_eq!(json["TransactionDetails"]["TransactionCode"], 136);
    }

    #[test]
    fn test_capture() {
        let request = gateway()
            .capture(ModificationParams::new("10.00", "USD", "1234"))
            .unwrap();
        let json = serde_json::to_value(request.data()).unwrap();

        assert_eq!(json["Amount"], "000000001000");
        assert_eq!(json["Currency"], "840");
        assert_eq!(json["ModificationType"], ModificationType::CAPTURE);
    }

    #[test]
    fn test_void_and_refund_types() {
        let params = ModificationParams::new("10.00", "USD", "1234");
        let void = gateway().void(params.clone()).unwrap();
        let refund = gateway().refund(params).unwrap();

        assert_eq!(void.data().modification_type, ModificationType::Void);
        assert_eq!(refund.data().modification_type, ModificationType::Refund);
    }

    #[test]
    fn test_capture_without_reference() {
        let params = ModificationParams {
            amount: "10.00".into(),
            currency: "USD".into(),
            transaction_id: None,
        };
        assert!(matches!(
            gateway().capture(params),
            Err(RequestError::MissingReference)
        ));
    }

    #[test]
    fn test_hosted_page() {
        let params = HostedPageParams::new(
            "10.00",
            "USD",
            "1234",
            "https://merchant/response/page.php",
        )
        .with_transaction_code(TransactionCode::SINGLE_PASS | TransactionCode::REQUEST_TOKEN);

        let request = gateway().hosted_page(params).unwrap();
        let json = serde_json::to_value(request.data()).unwrap();

        assert_eq!(json["TransactionDetails"]["Amount"], "000000001000");
        assert_eq!(json["TransactionDetails"]["Currency"], "840");
        assert_eq!(
            json["CardHolderResponseURL"],
            "https://merchant/response/page.php"
        );
        assert_eq!(json["TransactionDetails"]["TransactionCode"], "136");
    }

    #[test]
    fn test_hosted_page_result() {
        let request = gateway()
            .hosted_page_result(HostedPageResultParams::new("_JBfLQJNiEmFBtnF3AfoeQ2"))
            .unwrap();
        let json = serde_json::to_value(request.data()).unwrap();

        assert_eq!(json["string"], "_JBfLQJNiEmFBtnF3AfoeQ2");
    }

    #[test]
    fn test_hosted_page_url() {
        let gateway = Gateway::new(
            gateway()
                .config()
                .clone()
                .with_hosted_page("MyPageSet", "PaymentPage"),
        )
        .unwrap();

        assert_eq!(
            gateway.hosted_page_url("_JBfLQJNiEmFBtnF3AfoeQ2").unwrap(),
            "https://ecm.firstatlanticcommerce.com/MerchantPages/MyPageSet/PaymentPage/_JBfLQJNiEmFBtnF3AfoeQ2"
        );
        assert!(matches!(
            self::gateway().hosted_page_url("token"),
            Err(RequestError::MissingParameter("pageSet"))
        ));
    }

    #[test]
    fn test_endpoint_follows_test_mode() {
        assert_eq!(
            gateway().endpoint(),
            "https://ecm.firstatlanticcommerce.com/PGServiceXML/"
        );

        let live = Gateway::new(gateway().config().clone().with_test_mode(false)).unwrap();
        assert_eq!(
            live.endpoint(),
            "https://marlin.firstatlanticcommerce.com/PGServiceXML/"
        );
    }

    #[test]
    fn test_request_urls() {
        let gateway = gateway();
        assert_eq!(
            gateway.request_url::<crate::AuthorizeRequest>(),
            "https://ecm.firstatlanticcommerce.com/PGServiceXML/Authorize"
        );
        assert_eq!(
            gateway.request_url::<crate::TransactionModificationRequest>(),
            "https://ecm.firstatlanticcommerce.com/PGServiceXML/TransactionModification"
        );
    }

    #[tokio::test]
    async fn test_send_authorize_approved() {
        let gateway = gateway();
        let transport = MockTransport::replying(200, APPROVED_AUTH);
        let request = gateway.authorize(card_params()).unwrap();

        let response = gateway.send(&transport, &request).await.unwrap();

        assert!(response.approved);
        assert_eq!(response.reference.as_deref(), Some("307916543749"));
        assert_eq!(response.auth_code.as_deref(), Some("654321"));

        let posts = transport.posts.lock().unwrap();
        assert_eq!(posts.len(), 1);
        let (url, body) = &posts[0];
        assert!(url.ends_with("/Authorize"));
        assert!(body.contains(&format!("<AuthorizeRequest xmlns=\"{}\">", NAMESPACE)));
        assert!(body.contains("<Amount>000000001000</Amount>"));
        assert!(body.contains("<TransactionCode>8</TransactionCode>"));
    }

    #[tokio::test]
    async fn test_send_declined_is_not_an_error() {
        let gateway = gateway();
        let declined = APPROVED_AUTH.replace(
            "<ResponseCode>1</ResponseCode>",
            "<ResponseCode>2</ResponseCode>",
        );
        let transport = MockTransport::replying(200, &declined);
        let request = gateway.purchase(card_params()).unwrap();

        let response = gateway.send(&transport, &request).await.unwrap();
        assert!(!response.approved);
        assert_eq!(response.response_code, "2");
    }

    #[tokio::test]
    async fn test_send_http_error() {
        let gateway = gateway();
        let transport = MockTransport::replying(503, "Service Unavailable");
        let request = gateway
            .transaction_status(TransactionStatusParams::new("1234"))
            .unwrap();

        let result = gateway.send(&transport, &request).await;
        assert!(matches!(result, Err(GatewayError::Http { status: 503, .. })));
    }

    #[tokio::test]
    async fn test_send_transport_failure() {
        let gateway = gateway();
        let transport = MockTransport::unreachable();
        let request = gateway
            .capture(ModificationParams::new("10.00", "USD", "1234"))
            .unwrap();

        let result = gateway.send(&transport, &request).await;
        assert!(matches!(result, Err(GatewayError::Transport(_))));
    }

    #[tokio::test]
    async fn test_send_modification_body() {
        let gateway = gateway();
        let reply = "<TransactionModificationResponse><OrderNumber>1234</OrderNumber>\
            <ReasonCode>1101</ReasonCode><ResponseCode>1</ResponseCode>\
            </TransactionModificationResponse>";
        let transport = MockTransport::replying(200, reply);
        let request = gateway
            .refund(ModificationParams::new("5.00", "USD", "1234"))
            .unwrap();

        let response = gateway.send(&transport, &request).await.unwrap();
        assert!(response.approved);
        assert_eq!(response.reference.as_deref(), Some("1234"));

        let posts = transport.posts.lock().unwrap();
        let (_, body) = &posts[0];
        assert!(body.contains("<ModificationType>2</ModificationType>"));
        assert!(body.contains("<Password>abcdefg</Password>"));
    }

    #[tokio::test]
    async fn test_send_hosted_page_result() {
        let gateway = gateway();
        let reply = r#"<HostedPageResultsResponse xmlns="http://schemas.firstatlanticcommerce.com/gateway/data" xmlns:i="http://www.w3.org/2001/XMLSchema-instance">
            <AuthResponse>
                <AcquirerId>12345</AcquirerId>
                <CreditCardTransactionResults>
                    <AuthCode>017381</AuthCode>
                    <ReasonCode>1</ReasonCode>
                    <ReasonCodeDescription>Transaction is approved.</ReasonCodeDescription>
                    <ReferenceNumber>99</ReferenceNumber>
                    <ResponseCode>1</ResponseCode>
                </CreditCardTransactionResults>
                <MerchantId>123456</MerchantId>
                <OrderNumber>1234</OrderNumber>
            </AuthResponse>
            <FraudControlResults i:nil="true"/>
            <PurchaseAmount>000000001000</PurchaseAmount>
            <ThreeDSResult>
                <AuthenticationResult>Y</AuthenticationResult>
                <ECIIndicator>05</ECIIndicator>
            </ThreeDSResult>
        </HostedPageResultsResponse>"#;
        let transport = MockTransport::replying(200, reply);
        let request = gateway
            .hosted_page_result(HostedPageResultParams::new("_JBfLQJNiEmFBtnF3AfoeQ2"))
            .unwrap();

        let response = gateway.send(&transport, &request).await.unwrap();

        assert!(response.approved);
        assert_eq!(response.reference.as_deref(), Some("99"));
        assert_eq!(response.order_number.as_deref(), Some("1234"));
        assert_eq!(response.auth_code.as_deref(), Some("017381"));

        let posts = transport.posts.lock().unwrap();
        let (url, body) = &posts[0];
        assert!(url.ends_with("/HostedPageResults"));
        assert!(body.contains("<string>_JBfLQJNiEmFBtnF3AfoeQ2</string>"));
    }

    #[tokio::test]
    async fn test_send_transaction_status() {
        let gateway = gateway();
        let reply = r#"<TransactionStatusResponse xmlns="http://schemas.firstatlanticcommerce.com/gateway/data" xmlns:i="http://www.w3.org/2001/XMLSchema-instance">
            <AcquirerId>12345</AcquirerId>
            <CreditCardTransactionResults>
                <AuthCode>017381</AuthCode>
                <PaddedCardNumber>XXXXXXXXXXXX1111</PaddedCardNumber>
                <ReasonCode>1</ReasonCode>
                <ReasonCodeDescription>Transaction is approved.</ReasonCodeDescription>
                <ReferenceNumber>307916543749</ReferenceNumber>
                <ResponseCode>1</ResponseCode>
            </CreditCardTransactionResults>
            <FraudControlResults i:nil="true"/>
            <MerchantId>123456</MerchantId>
            <OrderNumber>1234</OrderNumber>
            <PurchaseAmount>000000001000</PurchaseAmount>
        </TransactionStatusResponse>"#;
        let transport = MockTransport::replying(200, reply);
        let request = gateway
            .transaction_status(TransactionStatusParams::new("1234"))
            .unwrap();

        let response = gateway.send(&transport, &request).await.unwrap();

        assert!(response.approved);
        assert_eq!(response.reference.as_deref(), Some("307916543749"));
        assert_eq!(response.order_number.as_deref(), Some("1234"));

        let posts = transport.posts.lock().unwrap();
        let (url, body) = &posts[0];
        assert!(url.ends_with("/TransactionStatus"));
        assert!(body.contains("<OrderNumber>1234</OrderNumber>"));
    }
}
