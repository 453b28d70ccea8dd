use market_core::model::{
    CryptocurrencyAddress, CryptocurrencyAddressType, Currency, EntityId, ItemInformation,
    ItemPrice, ListingItemTemplate, ListingItemTemplateFilter, ListingItemTemplatePatch,
    NewListingItemTemplate, PaymentInformation, PaymentType, ShippingPrice,
};
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension, Row};

use super::columns::{decimal_text, now_millis, parse_decimal, parse_enum, to_datetime};
use super::{DataMapper, HashedMapper};

const COLUMNS: &str = "id, hash, profile_id, created_at, updated_at";

/// Mapper for templates and their item/payment sub-records
///
/// The sub-records live in their own tables keyed by template id and are
/// removed with the template through the foreign key cascade.
pub struct ListingItemTemplateMapper<'a> {
    conn: &'a Connection,
}

impl<'a> ListingItemTemplateMapper<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<ListingItemTemplate> {
        Ok(ListingItemTemplate {
            id: row.get(0)?,
            hash: row.get(1)?,
            profile_id: row.get(2)?,
            item_information: None,
            payment_information: None,
            created_at: to_datetime(row.get(3)?),
            updated_at: to_datetime(row.get(4)?),
        })
    }

    fn load_item_information(
        &self,
        template_id: EntityId,
    ) -> rusqlite::Result<Option<ItemInformation>> {
        self.conn
            .query_row(
                "SELECT title, short_description, long_description, item_category_id
                 FROM item_informations WHERE listing_item_template_id = ?1",
                [template_id],
                |row| {
                    Ok(ItemInformation {
                        title: row.get(0)?,
                        short_description: row.get(1)?,
                        long_description: row.get(2)?,
                        item_category_id: row.get(3)?,
                    })
                },
            )
            .optional()
    }

    fn load_payment_information(
        &self,
        template_id: EntityId,
    ) -> rusqlite::Result<Option<PaymentInformation>> {
        self.conn
            .query_row(
                "SELECT payment_type, currency, base_price, domestic_shipping_price,
                        international_shipping_price, address_type, address
                 FROM payment_informations WHERE listing_item_template_id = ?1",
                [template_id],
                payment_from_row,
            )
            .optional()
    }

    fn load_related(&self, template: &mut ListingItemTemplate) -> rusqlite::Result<()> {
        template.item_information = self.load_item_information(template.id)?;
        template.payment_information = self.load_payment_information(template.id)?;
        Ok(())
    }

    fn upsert_item_information(
        &self,
        template_id: EntityId,
        item: &ItemInformation,
    ) -> rusqlite::Result<()> {
        self.conn.execute(
            "INSERT INTO item_informations
                (listing_item_template_id, title, short_description, long_description, item_category_id)
             VALUES (?1, ?2, ?3, ?4, ?5)
             ON CONFLICT(listing_item_template_id) DO UPDATE SET
                title = excluded.title,
                short_description = excluded.short_description,
                long_description = excluded.long_description,
                item_category_id = excluded.item_category_id",
            params![
                template_id,
                item.title,
                item.short_description,
                item.long_description,
                item.item_category_id,
            ],
        )?;
        Ok(())
    }

    fn upsert_payment_information(
        &self,
        template_id: EntityId,
        payment: &PaymentInformation,
    ) -> rusqlite::Result<()> {
        let price = &payment.item_price;
        let address = price.cryptocurrency_address.as_ref();
        self.conn.execute(
            "INSERT INTO payment_informations
                (listing_item_template_id, payment_type, currency, base_price,
                 domestic_shipping_price, international_shipping_price, address_type, address)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
             ON CONFLICT(listing_item_template_id) DO UPDATE SET
                payment_type = excluded.payment_type,
                currency = excluded.currency,
                base_price = excluded.base_price,
                domestic_shipping_price = excluded.domestic_shipping_price,
                international_shipping_price = excluded.international_shipping_price,
                address_type = excluded.address_type,
                address = excluded.address",
            params![
                template_id,
                payment.payment_type.as_str(),
                price.currency.as_str(),
                decimal_text(&price.base_price),
                decimal_text(&price.shipping_price.domestic),
                decimal_text(&price.shipping_price.international),
                address.map(|a| a.address_type.as_str()),
                address.map(|a| a.address.as_str()),
            ],
        )?;
        Ok(())
    }
}

fn payment_from_row(row: &Row<'_>) -> rusqlite::Result<PaymentInformation> {
    let payment_type: String = row.get(0)?;
    let currency: String = row.get(1)?;
    let base_price: String = row.get(2)?;
    let domestic: String = row.get(3)?;
    let international: String = row.get(4)?;
    let address_type: Option<String> = row.get(5)?;
    let address: Option<String> = row.get(6)?;

    let cryptocurrency_address = match address {
        Some(address) => Some(CryptocurrencyAddress {
            address_type: match address_type {
                Some(text) => parse_enum::<CryptocurrencyAddressType>("address_type", &text)?,
                None => CryptocurrencyAddressType::default(),
            },
            address,
        }),
        None => None,
    };

    Ok(PaymentInformation {
        payment_type: parse_enum::<PaymentType>("payment_type", &payment_type)?,
        item_price: ItemPrice {
            currency: parse_enum::<Currency>("currency", &currency)?,
            base_price: parse_decimal("base_price", &base_price)?,
            shipping_price: ShippingPrice {
                domestic: parse_decimal("domestic_shipping_price", &domestic)?,
                international: parse_decimal("international_shipping_price", &international)?,
            },
            cryptocurrency_address,
        },
    })
}

impl DataMapper for ListingItemTemplateMapper<'_> {
    type Entity = ListingItemTemplate;
    type New = NewListingItemTemplate;
    type Patch = ListingItemTemplatePatch;
    type Filter = ListingItemTemplateFilter;

    const ENTITY: &'static str = "ListingItemTemplate";

    fn get(
        &self,
        id: EntityId,
        with_related: bool,
    ) -> rusqlite::Result<Option<ListingItemTemplate>> {
        let template = self
            .conn
            .query_row(
                &format!("SELECT {} FROM listing_item_templates WHERE id = ?1", COLUMNS),
                [id],
                Self::from_row,
            )
            .optional()?;
        match template {
            Some(mut template) if with_related => {
                self.load_related(&mut template)?;
                Ok(Some(template))
            }
            other => Ok(other),
        }
    }

    fn list(
        &self,
        filter: &ListingItemTemplateFilter,
        with_related: bool,
    ) -> rusqlite::Result<Vec<ListingItemTemplate>> {
        let mut sql = format!("SELECT {} FROM listing_item_templates WHERE 1 = 1", COLUMNS);
        let mut args: Vec<Value> = Vec::new();
        if let Some(profile_id) = filter.profile_id {
            args.push(Value::Integer(profile_id));
            sql.push_str(&format!(" AND profile_id = ?{}", args.len()));
        }
        if let Some(title) = &filter.title_contains {
            args.push(Value::Text(title.clone()));
            sql.push_str(&format!(
                " AND id IN (SELECT listing_item_template_id FROM item_informations
                             WHERE instr(title, ?{}) > 0)",
                args.len()
            ));
        }
        sql.push_str(" ORDER BY id");

        let mut stmt = self.conn.prepare(&sql)?;
        let mut templates = stmt
            .query_map(params_from_iter(args), Self::from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        if with_related {
            for template in &mut templates {
                self.load_related(template)?;
            }
        }
        Ok(templates)
    }

    /// Template row and both sub-records are written in one transaction
    fn insert(&self, new: &NewListingItemTemplate) -> rusqlite::Result<EntityId> {
        let tx = self.conn.unchecked_transaction()?;
        let now = now_millis();
        tx.execute(
            "INSERT INTO listing_item_templates (hash, profile_id, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4)",
            params![new.hash, new.profile_id, now, now],
        )?;
        let id = tx.last_insert_rowid();
        self.upsert_item_information(id, &new.item_information)?;
        self.upsert_payment_information(id, &new.payment_information)?;
        tx.commit()?;
        Ok(id)
    }

    fn update_partial(
        &self,
        id: EntityId,
        patch: &ListingItemTemplatePatch,
    ) -> rusqlite::Result<usize> {
        let tx = self.conn.unchecked_transaction()?;
        let touched = tx.execute(
            "UPDATE listing_item_templates SET
                hash = COALESCE(?1, hash),
                updated_at = ?2
             WHERE id = ?3",
            params![patch.hash, now_millis(), id],
        )?;
        if touched > 0 {
            if let Some(item) = &patch.item_information {
                self.upsert_item_information(id, item)?;
            }
            if let Some(payment) = &patch.payment_information {
                self.upsert_payment_information(id, payment)?;
            }
        }
        tx.commit()?;
        Ok(touched)
    }

    fn delete(&self, id: EntityId) -> rusqlite::Result<usize> {
        self.conn
            .execute("DELETE FROM listing_item_templates WHERE id = ?1", [id])
    }
}

impl HashedMapper for ListingItemTemplateMapper<'_> {
    fn get_by_hash(
        &self,
        hash: &str,
        with_related: bool,
    ) -> rusqlite::Result<Option<ListingItemTemplate>> {
        let template = self
            .conn
            .query_row(
                &format!(
                    "SELECT {} FROM listing_item_templates WHERE hash = ?1 ORDER BY id LIMIT 1",
                    COLUMNS
                ),
                [hash],
                Self::from_row,
            )
            .optional()?;
        match template {
            Some(mut template) if with_related => {
                self.load_related(&mut template)?;
                Ok(Some(template))
            }
            other => Ok(other),
        }
    }
}
