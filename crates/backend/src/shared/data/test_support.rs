//! In-memory database with the production schema and a small UPD fixture.

use sea_orm::{ConnectionTrait, Database, DatabaseConnection};

const SCHEMA: &str = include_str!("../../../../../migrations/0001_upd_archive.sql");

pub const UPD_ID: &str = "6f1c3a52-9b0e-4d8e-b1a7-0c2f4e5d6a7b";
pub const UPD_WITHOUT_REFS_ID: &str = "0b7d6c1e-2a3f-4e5d-8c9b-1a2b3c4d5e6f";
pub const DELETED_UPD_ID: &str = "9e8d7c6b-5a49-4382-a1b0-c9d8e7f6a5b4";

const FIXTURE: &str = r#"
INSERT INTO a003_counterparty (id, code, description, inn)
VALUES ('cp-1', 'К-001', 'ООО «Электроремонт»', '7701234567');

INSERT INTO a027_subdivision (id, code, description)
VALUES ('sd-1', 'П-01', 'Цех №3');

INSERT INTO a025_upd_document
    (id, code, description, document_no, document_date, counterparty_id, subdivision_id, total_income, total_expense)
VALUES
    ('6f1c3a52-9b0e-4d8e-b1a7-0c2f4e5d6a7b', 'УПД-17', 'УПД-17 от 2024-03-05', 'УПД-17', '2024-03-05', 'cp-1', 'sd-1', 5200.0, 900.0),
    ('0b7d6c1e-2a3f-4e5d-8c9b-1a2b3c4d5e6f', 'УПД-18', 'УПД-18 от 2024-03-06', 'УПД-18', '2024-03-06', 'cp-missing', NULL, NULL, NULL);

INSERT INTO a025_upd_document
    (id, code, description, document_no, document_date, counterparty_id, is_deleted)
VALUES
    ('9e8d7c6b-5a49-4382-a1b0-c9d8e7f6a5b4', 'УПД-19', 'УПД-19 от 2024-03-07', 'УПД-19', '2024-03-07', 'cp-1', 1);

INSERT INTO a026_reception (id, reception_no, reception_date, subdivision_id)
VALUES
    ('rc-2', 'ПР-0002', '2024-02-20', NULL),
    ('rc-1', 'ПР-0001', '2024-02-10', 'sd-1');

INSERT INTO a026_reception_item
    (id, reception_id, upd_document_id, position_number, service_description, inventory_number, work_group, item_description, quantity, price, transaction_type, is_deleted)
VALUES
    ('it-1', 'rc-2', '6f1c3a52-9b0e-4d8e-b1a7-0c2f4e5d6a7b', 1, 'Насос К 80-50', NULL, 'Ремонт', 'Замена сальника', 1, 1200.0, 'Доходы', 0),
    ('it-2', 'rc-1', '6f1c3a52-9b0e-4d8e-b1a7-0c2f4e5d6a7b', 2, 'Двигатель АИР 100', 'ИНВ-77', NULL, 'Перемотка статора', 2, 2000.0, 'Доходы', 0),
    ('it-3', 'rc-1', '6f1c3a52-9b0e-4d8e-b1a7-0c2f4e5d6a7b', 1, 'Двигатель АИР 80', 'ИНВ-12', 'Ремонт', 'Подшипник 6205', NULL, 900.0, 'Расходы', 0),
    ('it-4', 'rc-1', '6f1c3a52-9b0e-4d8e-b1a7-0c2f4e5d6a7b', 1, 'Двигатель АИР 80', 'ИНВ-12', 'Ремонт', 'Удалённая строка', 1, 100.0, 'Доходы', 1),
    ('it-5', 'rc-1', '0b7d6c1e-2a3f-4e5d-8c9b-1a2b3c4d5e6f', 1, 'Двигатель АИР 80', 'ИНВ-12', NULL, 'Чужая строка', 1, 100.0, 'Доходы', 0);
"#;

pub async fn memory_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("in-memory sqlite");
    db.execute_unprepared(SCHEMA).await.expect("schema");
    db.execute_unprepared(FIXTURE).await.expect("fixture");
    db
}
