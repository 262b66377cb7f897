/// Wraps `body` in the envelope of a shipper load plan message.
pub fn load_plan(body: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<ProcessTMSShipperLoadPlan releaseID="9.2">
  <ApplicationArea>
    <Sender><LogicalID>tms-prod</LogicalID></Sender>
  </ApplicationArea>
  <DataArea>
    <Process/>
    <TMSShipperLoadPlan>
      <LeanXML>
        <ShipperLoadPlan>
{body}
        </ShipperLoadPlan>
      </LeanXML>
    </TMSShipperLoadPlan>
  </DataArea>
</ProcessTMSShipperLoadPlan>"#
    )
}

/// Same envelope as [`load_plan`], with a default namespace on the root.
pub fn namespaced_load_plan(body: &str) -> String {
    load_plan(body).replacen(
        "<ProcessTMSShipperLoadPlan releaseID=\"9.2\">",
        "<ProcessTMSShipperLoadPlan xmlns=\"http://schema.infor.com/InforOAGIS/2\" releaseID=\"9.2\">",
        1,
    )
}

/// Same envelope as [`load_plan`], with a DOCTYPE declaring an internal entity.
pub fn doctype_load_plan(body: &str) -> String {
    load_plan(body).replacen(
        "?>\n",
        "?>\n<!DOCTYPE ProcessTMSShipperLoadPlan [\n  <!ENTITY yard \"North Yard\">\n]>\n",
        1,
    )
}

pub const FULL_BODY: &str = r#"
          <LoadNumber>LD-20931</LoadNumber>
          <Equipment>53FT-DRY</Equipment>
          <Stops>
            <Stop>
              <StopNumber>5</StopNumber>
              <OrderNums>
                <OrderNum>ORD1</OrderNum>
                <OrderNum>ORD2</OrderNum>
              </OrderNums>
            </Stop>
            <Stop>
              <StopNumber>6</StopNumber>
              <OrderNums><OrderNum>ORD3</OrderNum></OrderNums>
            </Stop>
          </Stops>"#;

pub const NO_EQUIPMENT_BODY: &str = r#"
          <LoadNumber>LD-20931</LoadNumber>
          <Stops>
            <Stop>
              <StopNumber>5</StopNumber>
              <OrderNums><OrderNum>ORD1</OrderNum></OrderNums>
            </Stop>
          </Stops>"#;

pub const ANNOTATED_BODY: &str = r#"
          <LoadNumber><?audit checked?>LD-20931</LoadNumber>
          <Equipment><!-- assigned at &yard; -->53FT<!-- dry van -->-DRY</Equipment>
          <Stops>
            <Stop>
              <StopNumber>5</StopNumber>
              <OrderNums><OrderNum><!-- primary -->ORD1</OrderNum></OrderNums>
            </Stop>
          </Stops>"#;
